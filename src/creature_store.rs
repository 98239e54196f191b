use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::battle::{run_battle_with, BattleEvent, BattleReport};
use crate::constants::ROSTER_HEADERS;
use crate::creature::{Creature, CreaturePatch};
use crate::error::{ArenaError, Result};

/// One roster CSV row. Columns beyond these are ignored on read.
#[derive(Debug, Serialize, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    creature_type: String,
    #[serde(rename = "HP")]
    hp: u32,
    #[serde(rename = "Attack")]
    attack: i32,
    #[serde(rename = "Defense")]
    defense: i32,
    #[serde(rename = "Sp. Atk")]
    special_attack: i32,
    #[serde(rename = "Sp. Def")]
    special_defense: i32,
    #[serde(rename = "Speed")]
    speed: i32,
}

impl RosterRow {
    fn into_creature(self) -> Result<Creature> {
        if self.hp == 0 {
            return Err(ArenaError::invalid_stat("HP", "0"));
        }
        Ok(Creature::new(
            self.name,
            self.creature_type,
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ))
    }
}

impl From<&Creature> for RosterRow {
    fn from(creature: &Creature) -> Self {
        Self {
            name: creature.name.clone(),
            creature_type: creature.creature_type.clone(),
            hp: creature.max_health,
            attack: creature.attack,
            defense: creature.defense,
            special_attack: creature.special_attack,
            special_defense: creature.special_defense,
            speed: creature.speed,
        }
    }
}

/// In-memory roster keyed by creature name, listed in insertion order.
#[derive(Debug, Default, Clone)]
pub struct CreatureStore {
    creatures: Vec<Creature>,
}

impl CreatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster with the contents of a CSV file.
    ///
    /// Failures are logged and reported as `false`; the roster is then empty.
    pub fn load(&mut self, path: &Path) -> bool {
        match self.try_load(path) {
            Ok(count) => {
                info!(path = %path.display(), count, "roster loaded");
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load roster");
                self.creatures.clear();
                false
            }
        }
    }

    /// Replaces the roster with the contents of a CSV file and returns the
    /// number of creatures now stored. On error the roster is left untouched.
    pub fn try_load(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path)?;
        self.try_load_from(file)
    }

    pub fn try_load_from<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut loaded = Vec::new();
        for row in csv_reader.deserialize::<RosterRow>() {
            loaded.push(row?.into_creature()?);
        }

        self.creatures.clear();
        for creature in loaded {
            self.add(creature);
        }
        Ok(self.creatures.len())
    }

    /// Writes the roster as CSV with the same columns `load` expects.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.save_to(file)?;
        info!(path = %path.display(), count = self.creatures.len(), "roster saved");
        Ok(())
    }

    pub fn save_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if self.creatures.is_empty() {
            csv_writer.write_record(ROSTER_HEADERS)?;
        }
        for creature in &self.creatures {
            csv_writer.serialize(RosterRow::from(creature))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Inserts a creature, replacing any existing one with the same name in place.
    pub fn add(&mut self, creature: Creature) {
        match self.position(&creature.name) {
            Some(index) => self.creatures[index] = creature,
            None => self.creatures.push(creature),
        }
    }

    /// Applies `patch` to the named creature. Returns false if it is absent.
    pub fn update(&mut self, name: &str, patch: &CreaturePatch) -> bool {
        match self.get_mut(name) {
            Some(creature) => {
                creature.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.creatures.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.name == name)
    }

    pub fn list_all(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Runs a battle between two stored creatures, updating their health in place.
    pub fn battle(
        &mut self,
        first: &str,
        second: &str,
        rng: &mut impl Rng,
    ) -> Result<BattleReport> {
        self.battle_with(first, second, rng, |_| {})
    }

    /// Like [`CreatureStore::battle`], handing each event to `on_event` as it happens.
    pub fn battle_with(
        &mut self,
        first: &str,
        second: &str,
        rng: &mut impl Rng,
        on_event: impl FnMut(&BattleEvent<'_>),
    ) -> Result<BattleReport> {
        let i = self
            .position(first)
            .ok_or_else(|| ArenaError::NotFound(first.to_string()))?;
        let j = self
            .position(second)
            .ok_or_else(|| ArenaError::NotFound(second.to_string()))?;
        if i == j {
            return Err(ArenaError::SameContender(first.to_string()));
        }

        let (a, b) = pair_mut(&mut self.creatures, i, j);
        Ok(run_battle_with(a, b, rng, on_event))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.creatures.iter().position(|c| c.name == name)
    }
}

/// Borrows two distinct elements mutably, in the order requested.
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    if i < j {
        let (left, right) = items.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
