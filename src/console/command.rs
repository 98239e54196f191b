use crate::creature::{Creature, CreaturePatch};
use crate::error::{ArenaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    Add,
    Modify,
    Delete,
    Battle,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ListAll),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Modify),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Battle),
            "6" => Some(MenuChoice::Save),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Field keys accepted by [`parse_patch_field`], in prompt order.
pub const PATCH_FIELDS: [&str; 7] = [
    "type",
    "hp",
    "attack",
    "defense",
    "sp_attack",
    "sp_defense",
    "speed",
];

/// Combat stats are signed; only health has to stay positive.
pub fn parse_stat(field: &str, input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ArenaError::invalid_stat(field, input.trim()))
}

pub fn parse_health(input: &str) -> Result<u32> {
    match input.trim().parse::<u32>() {
        Ok(hp) if hp > 0 => Ok(hp),
        _ => Err(ArenaError::invalid_stat("HP", input.trim())),
    }
}

/// Sets one slot of `patch` from its textual key and value.
///
/// A blank value leaves the slot untouched. Unknown keys are an error
/// rather than being dropped.
pub fn parse_patch_field(patch: &mut CreaturePatch, field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match field.trim().to_lowercase().as_str() {
        "type" => patch.creature_type = Some(value.to_string()),
        "hp" => patch.max_health = Some(parse_health(value)?),
        "attack" => patch.attack = Some(parse_stat("Attack", value)?),
        "defense" => patch.defense = Some(parse_stat("Defense", value)?),
        "sp_attack" | "sp. atk" => patch.special_attack = Some(parse_stat("Sp. Atk", value)?),
        "sp_defense" | "sp. def" => {
            patch.special_defense = Some(parse_stat("Sp. Def", value)?)
        }
        "speed" => patch.speed = Some(parse_stat("Speed", value)?),
        other => return Err(ArenaError::UnknownField(other.to_string())),
    }
    Ok(())
}

/// Builds a patch from `(field, value)` pairs; the first bad pair aborts it.
pub fn parse_patch(pairs: &[(&str, &str)]) -> Result<CreaturePatch> {
    let mut patch = CreaturePatch::default();
    for (field, value) in pairs {
        parse_patch_field(&mut patch, field, value)?;
    }
    Ok(patch)
}

/// Raw answers for a new creature, in prompt order.
#[derive(Debug, Clone, Default)]
pub struct CreatureForm {
    pub name: String,
    pub creature_type: String,
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub special_attack: String,
    pub special_defense: String,
    pub speed: String,
}

impl CreatureForm {
    pub fn build(&self) -> Result<Creature> {
        Ok(Creature::new(
            self.name.trim(),
            self.creature_type.trim(),
            parse_health(&self.hp)?,
            parse_stat("Attack", &self.attack)?,
            parse_stat("Defense", &self.defense)?,
            parse_stat("Sp. Atk", &self.special_attack)?,
            parse_stat("Sp. Def", &self.special_defense)?,
            parse_stat("Speed", &self.speed)?,
        ))
    }
}

/// Converts a 1-based menu pick into an index below `len`.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let number = input.trim().parse::<usize>().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ListAll));
        assert_eq!(MenuChoice::parse(" 5 \n"), Some(MenuChoice::Battle));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("list"), None);
    }

    #[test]
    fn test_parse_stat() {
        assert_eq!(parse_stat("Attack", " 55 ").unwrap(), 55);
        assert!(parse_stat("Attack", "fifty").is_err());
        assert_eq!(parse_stat("Attack", "-5").unwrap(), -5);
        assert_eq!(parse_stat("Defense", "  -120").unwrap(), -120);
    }

    #[test]
    fn test_parse_health() {
        assert_eq!(parse_health(" 35 ").unwrap(), 35);
        assert!(parse_health("0").is_err());
        assert!(parse_health("-5").is_err());
        assert!(parse_health("many").is_err());
    }

    #[test]
    fn test_parse_patch() {
        let patch = parse_patch(&[("attack", "55"), ("type", "Steel"), ("speed", "")]).unwrap();
        assert_eq!(patch.attack, Some(55));
        assert_eq!(patch.creature_type.as_deref(), Some("Steel"));
        assert_eq!(patch.speed, None);
        assert_eq!(patch.defense, None);
    }

    #[test]
    fn test_parse_patch_unknown_field() {
        let err = parse_patch(&[("charisma", "10")]).unwrap_err();
        assert!(matches!(err, ArenaError::UnknownField(f) if f == "charisma"));
    }

    #[test]
    fn test_parse_patch_rejects_zero_hp() {
        assert!(parse_patch(&[("hp", "0")]).is_err());
    }

    #[test]
    fn test_parse_patch_accepts_negative_stats() {
        let patch = parse_patch(&[("defense", "-10"), ("speed", "-1")]).unwrap();
        assert_eq!(patch.defense, Some(-10));
        assert_eq!(patch.speed, Some(-1));
    }

    #[test]
    fn test_all_patch_fields_known() {
        for field in PATCH_FIELDS {
            assert!(parse_patch(&[(field, "7")]).is_ok(), "{} rejected", field);
        }
    }

    #[test]
    fn test_creature_form_build() {
        let form = CreatureForm {
            name: "Pikachu".into(),
            creature_type: "Electric".into(),
            hp: "35".into(),
            attack: "55".into(),
            defense: "40".into(),
            special_attack: "50".into(),
            special_defense: "50".into(),
            speed: "90".into(),
        };
        let creature = form.build().unwrap();
        assert_eq!(creature.name, "Pikachu");
        assert_eq!(creature.speed, 90);

        let bad = CreatureForm {
            attack: "a lot".into(),
            ..form
        };
        assert!(matches!(bad.build(), Err(ArenaError::InvalidStat { .. })));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection("3", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("two", 3), None);
    }
}
