use rand::Rng;
use tracing::debug;

use super::types::{BattleEvent, BattlePhase, BattleReport, Contender};
use crate::creature::Creature;

/// Decides who strikes first: the faster creature, or a coin flip on a speed tie.
pub fn determine_first_attacker(
    first: &Creature,
    second: &Creature,
    rng: &mut impl Rng,
) -> Contender {
    if first.speed > second.speed {
        Contender::First
    } else if second.speed > first.speed {
        Contender::Second
    } else if rng.gen_bool(0.5) {
        Contender::First
    } else {
        Contender::Second
    }
}

/// A battle in progress. Holds both creatures mutably until it is dropped.
///
/// Events are passed to a callback as they occur rather than kept, so a
/// battle between very sturdy creatures runs in constant memory.
pub struct Battle<'a> {
    first: &'a mut Creature,
    second: &'a mut Creature,
    phase: BattlePhase,
    attacker: Contender,
    rounds: u64,
    first_attacks: u64,
    second_attacks: u64,
}

impl<'a> Battle<'a> {
    /// Prepares a battle; both creatures are restored to full health.
    pub fn new(first: &'a mut Creature, second: &'a mut Creature) -> Self {
        first.restore();
        second.restore();
        Self {
            first,
            second,
            phase: BattlePhase::Start,
            attacker: Contender::First,
            rounds: 0,
            first_attacks: 0,
            second_attacks: 0,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished { .. })
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Advances one transition and returns the new phase.
    pub fn step(&mut self, rng: &mut impl Rng) -> BattlePhase {
        self.step_with(rng, |_| {})
    }

    /// Like [`Battle::step`], reporting whatever happened to `on_event`.
    pub fn step_with(
        &mut self,
        rng: &mut impl Rng,
        mut on_event: impl FnMut(&BattleEvent<'_>),
    ) -> BattlePhase {
        self.phase = match self.phase {
            BattlePhase::Start => {
                self.attacker = determine_first_attacker(&*self.first, &*self.second, rng);
                let first_attacker = self.attacker.pick(&*self.first, &*self.second);
                debug!(first_attacker = %first_attacker.name, "battle started");
                on_event(&BattleEvent::Started {
                    first_attacker: &first_attacker.name,
                });
                BattlePhase::Exchange { round: 1 }
            }
            BattlePhase::Exchange { round } => self.exchange(round, &mut on_event),
            finished @ BattlePhase::Finished { .. } => finished,
        };
        self.phase
    }

    fn exchange(
        &mut self,
        round: u64,
        on_event: &mut impl FnMut(&BattleEvent<'_>),
    ) -> BattlePhase {
        let attacker_side = self.attacker;
        let (attacker, defender) = match attacker_side {
            Contender::First => (&mut *self.first, &mut *self.second),
            Contender::Second => (&mut *self.second, &mut *self.first),
        };

        let damage = attacker.damage_against(defender);
        defender.take_damage(damage);
        self.rounds = round;
        match attacker_side {
            Contender::First => self.first_attacks += 1,
            Contender::Second => self.second_attacks += 1,
        }

        debug!(
            round,
            attacker = %attacker.name,
            defender = %defender.name,
            damage,
            defender_health = defender.current_health,
            "attack"
        );
        on_event(&BattleEvent::Attack {
            round,
            attacker: &attacker.name,
            defender: &defender.name,
            damage,
            defender_health: defender.current_health,
            defender_max_health: defender.max_health,
        });

        if defender.is_fainted() {
            on_event(&BattleEvent::Fainted {
                name: &defender.name,
            });
            on_event(&BattleEvent::Victory {
                winner: &attacker.name,
            });
            BattlePhase::Finished {
                winner: attacker_side,
            }
        } else {
            self.attacker = attacker_side.other();
            BattlePhase::Exchange { round: round + 1 }
        }
    }

    /// Runs the remaining transitions and returns the final report.
    pub fn finish(self, rng: &mut impl Rng) -> BattleReport {
        self.finish_with(rng, |_| {})
    }

    /// Like [`Battle::finish`], reporting every event to `on_event`.
    pub fn finish_with(
        mut self,
        rng: &mut impl Rng,
        mut on_event: impl FnMut(&BattleEvent<'_>),
    ) -> BattleReport {
        let winner = loop {
            if let BattlePhase::Finished { winner } = self.step_with(rng, &mut on_event) {
                break winner;
            }
        };
        BattleReport {
            winner,
            winner_name: winner.pick(&*self.first, &*self.second).name.clone(),
            loser_name: winner.other().pick(&*self.first, &*self.second).name.clone(),
            rounds: self.rounds,
            first_attacks: self.first_attacks,
            second_attacks: self.second_attacks,
        }
    }
}

/// Fights `first` against `second` until one of them faints.
///
/// Both start at full health; the loser ends at 0 and the winner keeps
/// whatever health it has left.
pub fn run_battle(
    first: &mut Creature,
    second: &mut Creature,
    rng: &mut impl Rng,
) -> BattleReport {
    Battle::new(first, second).finish(rng)
}

/// [`run_battle`] with a live feed of events.
pub fn run_battle_with(
    first: &mut Creature,
    second: &mut Creature,
    rng: &mut impl Rng,
    on_event: impl FnMut(&BattleEvent<'_>),
) -> BattleReport {
    Battle::new(first, second).finish_with(rng, on_event)
}
