use linfa::prelude::*;
use linfa_linear::LinearRegression;
use log::debug;
use ndarray::{Array1, Array2, Axis};

use super::history::GameHistory;
use super::stats::{Field, Stat};

/// Pivots smaller than this (relative to the largest diagonal entry) mark a
/// column as linearly dependent on the ones before it.
const PIVOT_TOLERANCE: f64 = 1e-10;

/// A fitted linear model for one statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct StatModel {
    pub stat: Stat,
    /// Aligned with `stat.explanatory()`.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl StatModel {
    pub fn new(stat: Stat, coefficients: Vec<f64>, intercept: f64) -> Self {
        StatModel {
            stat,
            coefficients,
            intercept,
        }
    }

    pub fn explanatory(&self) -> &'static [Field] {
        self.stat.explanatory()
    }

    /// Fit `stat` on every played game in the history.
    pub fn fit(stat: Stat, history: &GameHistory) -> Self {
        let features = stat.explanatory();
        let samples: Vec<_> = history.played().collect();

        let x = Array2::from_shape_fn((samples.len(), features.len()), |(i, j)| {
            samples[i].get(features[j])
        });
        let y: Array1<f64> = samples.iter().map(|game| game.get(stat.field())).collect();

        let (coefficients, intercept) = least_squares(&x, &y);
        debug!(
            "{} model: coefficients {:?}, intercept {:.3} over {} games",
            stat.key(),
            coefficients,
            intercept,
            samples.len()
        );

        StatModel::new(stat, coefficients, intercept)
    }

    pub fn evaluate(&self, inputs: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(inputs)
                .map(|(coef, input)| coef * input)
                .sum::<f64>()
    }
}

/// One model per predicted statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSet {
    models: [StatModel; Stat::COUNT],
}

impl ModelSet {
    pub fn build(history: &GameHistory) -> Self {
        Self::from_fn(|stat| StatModel::fit(stat, history))
    }

    pub fn from_fn(f: impl FnMut(Stat) -> StatModel) -> Self {
        ModelSet {
            models: Stat::ALL.map(f),
        }
    }

    pub fn get(&self, stat: Stat) -> &StatModel {
        &self.models[stat.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatModel> {
        self.models.iter()
    }
}

/// Ordinary least squares with an intercept.
///
/// The normal equations are first solved on centered data, where dependent
/// and constant columns get a zero coefficient. When that system has full
/// rank and there are more samples than parameters, linfa's fit is used
/// instead. Never panics; an empty sample set gives an all-zero model.
pub fn least_squares(x: &Array2<f64>, y: &Array1<f64>) -> (Vec<f64>, f64) {
    let (fallback, full_rank) = centered_least_squares(x, y);

    if full_rank && x.nrows() > x.ncols() + 1 {
        let dataset = Dataset::new(x.clone(), y.clone());
        match LinearRegression::new().fit(&dataset) {
            Ok(model) => {
                let coefficients = model.params().to_vec();
                let intercept = model.intercept();
                if intercept.is_finite() && coefficients.iter().all(|c| c.is_finite()) {
                    return (coefficients, intercept);
                }
                debug!("linfa fit was not finite, keeping normal equation solution");
            }
            Err(e) => debug!("linfa fit failed ({}), keeping normal equation solution", e),
        }
    }

    fallback
}

fn centered_least_squares(x: &Array2<f64>, y: &Array1<f64>) -> ((Vec<f64>, f64), bool) {
    let (Some(x_mean), Some(y_mean)) = (x.mean_axis(Axis(0)), y.mean()) else {
        return ((vec![0.0; x.ncols()], 0.0), false);
    };

    let xc = x - &x_mean;
    let yc = y - y_mean;
    let gram = xc.t().dot(&xc);
    let moments = xc.t().dot(&yc);

    let (beta, full_rank) = solve_normal_equations(gram, moments);
    let intercept = y_mean - beta.dot(&x_mean);

    ((beta.to_vec(), intercept), full_rank)
}

/// Gaussian elimination on a symmetric positive semi-definite system.
/// Columns whose pivot vanishes are treated as dependent and solved as zero;
/// the flag reports whether every column was independent.
fn solve_normal_equations(mut a: Array2<f64>, mut b: Array1<f64>) -> (Array1<f64>, bool) {
    let n = b.len();
    let scale = a.diag().iter().fold(1.0_f64, |m, v| m.max(v.abs()));
    let mut independent = vec![true; n];

    for k in 0..n {
        let pivot = a[[k, k]];
        if pivot.abs() <= PIVOT_TOLERANCE * scale {
            independent[k] = false;
            continue;
        }
        for i in (k + 1)..n {
            let factor = a[[i, k]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                a[[i, j]] -= factor * a[[k, j]];
            }
            b[i] -= factor * b[k];
        }
    }

    let mut solution = Array1::zeros(n);
    for k in (0..n).rev() {
        if !independent[k] {
            continue;
        }
        let tail: f64 = ((k + 1)..n).map(|j| a[[k, j]] * solution[j]).sum();
        solution[k] = (b[k] - tail) / a[[k, k]];
    }

    let full_rank = independent.iter().all(|column| *column);
    (solution, full_rank)
}
