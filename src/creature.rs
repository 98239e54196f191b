use std::fmt;

use crate::constants::MIN_DAMAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub creature_type: String,
    pub max_health: u32,
    pub current_health: u32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
}

impl Creature {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        creature_type: impl Into<String>,
        max_health: u32,
        attack: i32,
        defense: i32,
        special_attack: i32,
        special_defense: i32,
        speed: i32,
    ) -> Self {
        Self {
            name: name.into(),
            creature_type: creature_type.into(),
            max_health,
            current_health: max_health,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.current_health == 0
    }

    pub fn restore(&mut self) {
        self.current_health = self.max_health;
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_health = self.current_health.saturating_sub(amount);
    }

    /// Damage this creature deals to `defender` with a plain attack.
    ///
    /// Half the defender's defense (floored, also for negative defense) is
    /// subtracted from attack, and the result never drops below [`MIN_DAMAGE`].
    pub fn damage_against(&self, defender: &Creature) -> u32 {
        let raw = i64::from(self.attack) - i64::from(defender.defense).div_euclid(2);
        u32::try_from(raw.max(i64::from(MIN_DAMAGE))).unwrap_or(u32::MAX)
    }

    /// Applies every `Some` slot of `patch`, leaving the other fields as they were.
    pub fn apply_patch(&mut self, patch: &CreaturePatch) {
        if let Some(creature_type) = &patch.creature_type {
            self.creature_type = creature_type.clone();
        }
        if let Some(max_health) = patch.max_health {
            self.max_health = max_health;
            self.current_health = self.current_health.min(max_health);
        }
        if let Some(attack) = patch.attack {
            self.attack = attack;
        }
        if let Some(defense) = patch.defense {
            self.defense = defense;
        }
        if let Some(special_attack) = patch.special_attack {
            self.special_attack = special_attack;
        }
        if let Some(special_defense) = patch.special_defense {
            self.special_defense = special_defense;
        }
        if let Some(speed) = patch.speed {
            self.speed = speed;
        }
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Type: {}, HP: {}, Attack: {}, Defense: {})",
            self.name, self.creature_type, self.max_health, self.attack, self.defense
        )
    }
}

/// Sparse update: one optional slot per mutable attribute.
///
/// The name is the record key and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreaturePatch {
    pub creature_type: Option<String>,
    pub max_health: Option<u32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub special_attack: Option<i32>,
    pub special_defense: Option<i32>,
    pub speed: Option<i32>,
}

impl CreaturePatch {
    pub fn is_empty(&self) -> bool {
        *self == CreaturePatch::default()
    }
}
