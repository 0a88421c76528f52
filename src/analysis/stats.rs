/// A value held by a game record: box-score counts, minutes, and the
/// opponent's ratings for that game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FieldGoalsMade,
    FieldGoalsAttempted,
    ThreesMade,
    ThreesAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    Minutes,
    OpponentOffense,
    OpponentDefense,
    OpponentPace,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::FieldGoalsMade => "fgm",
            Field::FieldGoalsAttempted => "fga",
            Field::ThreesMade => "3pm",
            Field::ThreesAttempted => "3pa",
            Field::FreeThrowsMade => "ftm",
            Field::FreeThrowsAttempted => "fta",
            Field::Rebounds => "rb",
            Field::Assists => "ast",
            Field::Steals => "stl",
            Field::Blocks => "blk",
            Field::Turnovers => "tov",
            Field::Minutes => "mins",
            Field::OpponentOffense => "oppOff",
            Field::OpponentDefense => "oppDef",
            Field::OpponentPace => "oppPace",
        }
    }

    /// The predicted statistic this field stands for, if any.
    pub fn stat(&self) -> Option<Stat> {
        Stat::ALL.into_iter().find(|stat| stat.field() == *self)
    }
}

/// A statistic the model predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    FreeThrowsAttempted,
    ThreesAttempted,
    FieldGoalsAttempted,
    FieldGoalsMade,
    ThreesMade,
    FreeThrowsMade,
}

impl Stat {
    pub const COUNT: usize = 11;

    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Rebounds,
        Stat::Assists,
        Stat::Steals,
        Stat::Blocks,
        Stat::Turnovers,
        Stat::FreeThrowsAttempted,
        Stat::ThreesAttempted,
        Stat::FieldGoalsAttempted,
        Stat::FieldGoalsMade,
        Stat::ThreesMade,
        Stat::FreeThrowsMade,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn field(&self) -> Field {
        match self {
            Stat::Rebounds => Field::Rebounds,
            Stat::Assists => Field::Assists,
            Stat::Steals => Field::Steals,
            Stat::Blocks => Field::Blocks,
            Stat::Turnovers => Field::Turnovers,
            Stat::FreeThrowsAttempted => Field::FreeThrowsAttempted,
            Stat::ThreesAttempted => Field::ThreesAttempted,
            Stat::FieldGoalsAttempted => Field::FieldGoalsAttempted,
            Stat::FieldGoalsMade => Field::FieldGoalsMade,
            Stat::ThreesMade => Field::ThreesMade,
            Stat::FreeThrowsMade => Field::FreeThrowsMade,
        }
    }

    pub fn key(&self) -> &'static str {
        self.field().key()
    }

    /// Explanatory variables of this statistic's model, in coefficient order.
    pub fn explanatory(&self) -> &'static [Field] {
        use Field::*;
        match self {
            Stat::Rebounds => &[Minutes, OpponentPace],
            Stat::Assists => &[Minutes, OpponentPace, OpponentDefense],
            Stat::Steals => &[Minutes, OpponentPace, OpponentOffense],
            Stat::Blocks => &[Minutes, OpponentPace, OpponentOffense],
            Stat::Turnovers => &[Minutes, OpponentPace, OpponentDefense],
            Stat::FreeThrowsAttempted => &[Minutes, OpponentPace, OpponentDefense],
            Stat::ThreesAttempted => &[Minutes, OpponentPace, OpponentDefense],
            Stat::FieldGoalsAttempted => &[Minutes, OpponentPace, OpponentDefense],
            Stat::FieldGoalsMade => &[FieldGoalsAttempted, OpponentPace, OpponentDefense],
            Stat::ThreesMade => &[ThreesAttempted, OpponentPace, OpponentDefense],
            Stat::FreeThrowsMade => &[FreeThrowsAttempted, OpponentPace],
        }
    }

    /// Other predicted statistics this one takes as input.
    pub fn dependencies(&self) -> impl Iterator<Item = Stat> {
        self.explanatory().iter().filter_map(Field::stat)
    }

    /// Base statistics depend only on the matchup; derived ones also on
    /// another predicted statistic.
    pub fn is_derived(&self) -> bool {
        self.dependencies().next().is_some()
    }

    fn depth(&self) -> usize {
        self.dependencies()
            .map(|dep| dep.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Every statistic, ordered so each comes after the statistics it depends on.
    pub fn evaluation_order() -> Vec<Stat> {
        let mut order = Stat::ALL.to_vec();
        order.sort_by_key(Stat::depth);
        order
    }
}
