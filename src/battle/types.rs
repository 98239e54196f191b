use crate::creature::Creature;

/// Identifies one of the two inputs of a battle by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contender {
    First,
    Second,
}

impl Contender {
    pub fn other(self) -> Self {
        match self {
            Contender::First => Contender::Second,
            Contender::Second => Contender::First,
        }
    }

    /// Returns whichever of `first` / `second` this contender refers to.
    pub fn pick<'a>(self, first: &'a Creature, second: &'a Creature) -> &'a Creature {
        match self {
            Contender::First => first,
            Contender::Second => second,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Start,
    Exchange { round: u64 },
    /// Terminal.
    Finished { winner: Contender },
}

/// One thing that happened during a battle, handed to the caller as it
/// happens. Names borrow from the fighting creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleEvent<'a> {
    Started {
        first_attacker: &'a str,
    },
    Attack {
        round: u64,
        attacker: &'a str,
        defender: &'a str,
        damage: u32,
        defender_health: u32,
        defender_max_health: u32,
    },
    Fainted {
        name: &'a str,
    },
    Victory {
        winner: &'a str,
    },
}

/// Outcome of a finished battle. Holds counters only, so its size does not
/// depend on how long the battle ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub winner: Contender,
    pub winner_name: String,
    pub loser_name: String,
    /// Number of attacks made, counting both sides.
    pub rounds: u64,
    pub first_attacks: u64,
    pub second_attacks: u64,
}

impl BattleReport {
    pub fn attacks_by(&self, side: Contender) -> u64 {
        match side {
            Contender::First => self.first_attacks,
            Contender::Second => self.second_attacks,
        }
    }
}
