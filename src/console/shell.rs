use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::Rng;
use tracing::debug;

use super::command::{parse_patch, parse_selection, CreatureForm, MenuChoice, PATCH_FIELDS};
use crate::battle::BattleEvent;
use crate::constants::MIN_BATTLE_PARTICIPANTS;
use crate::creature::Creature;
use crate::creature_store::CreatureStore;

/// One line of battle commentary per event.
pub fn describe_event(event: &BattleEvent<'_>) -> String {
    match event {
        BattleEvent::Started { first_attacker } => format!("{} moves first!", first_attacker),
        BattleEvent::Attack {
            round,
            attacker,
            defender,
            damage,
            defender_health,
            defender_max_health,
        } => format!(
            "\n--- Round {} ---\n{} attacks {} and deals {} damage!\n{}: HP remaining = {}/{}",
            round, attacker, defender, damage, defender, defender_health, defender_max_health
        ),
        BattleEvent::Fainted { name } => format!("\n{} fainted!", name),
        BattleEvent::Victory { winner } => format!("{} wins the battle!", winner),
    }
}

/// Line-based menu loop over any input/output pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(
        &mut self,
        store: &mut CreatureStore,
        roster_path: &Path,
        rng: &mut impl Rng,
    ) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Select an option: ")? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::ListAll) => self.list_all(store)?,
                Some(MenuChoice::Add) => self.add(store)?,
                Some(MenuChoice::Modify) => self.modify(store)?,
                Some(MenuChoice::Delete) => self.delete(store)?,
                Some(MenuChoice::Battle) => self.battle(store, rng)?,
                Some(MenuChoice::Save) => self.save(store, roster_path)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Thanks for playing!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n===== CREATURE BATTLE =====")?;
        writeln!(self.output, "1. Show all creatures")?;
        writeln!(self.output, "2. Add a new creature")?;
        writeln!(self.output, "3. Modify an existing creature")?;
        writeln!(self.output, "4. Delete a creature")?;
        writeln!(self.output, "5. Start a battle")?;
        writeln!(self.output, "6. Save roster")?;
        writeln!(self.output, "0. Exit")
    }

    /// Writes `text` and reads one line. `None` means input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Like `prompt`, with end of input read as a blank answer.
    fn ask(&mut self, text: &str) -> io::Result<String> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    fn list_all(&mut self, store: &CreatureStore) -> io::Result<()> {
        if store.is_empty() {
            return writeln!(self.output, "No creatures registered.");
        }
        writeln!(self.output, "\n--- CREATURE LIST ---")?;
        for (i, creature) in store.list_all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, creature)?;
        }
        Ok(())
    }

    fn add(&mut self, store: &mut CreatureStore) -> io::Result<()> {
        writeln!(self.output, "\n--- ADD NEW CREATURE ---")?;
        let name = self.ask("Name: ")?.trim().to_string();
        if name.is_empty() {
            return writeln!(self.output, "Name cannot be empty.");
        }
        if store.contains(&name) {
            return writeln!(self.output, "Creature {} already exists!", name);
        }

        let form = CreatureForm {
            name,
            creature_type: self.ask("Type: ")?,
            hp: self.ask("HP: ")?,
            attack: self.ask("Attack: ")?,
            defense: self.ask("Defense: ")?,
            special_attack: self.ask("Special Attack: ")?,
            special_defense: self.ask("Special Defense: ")?,
            speed: self.ask("Speed: ")?,
        };

        match form.build() {
            Ok(creature) => {
                writeln!(self.output, "Creature {} added successfully!", creature.name)?;
                store.add(creature);
                Ok(())
            }
            Err(e) => writeln!(self.output, "Error: stats must be numeric ({}).", e),
        }
    }

    fn modify(&mut self, store: &mut CreatureStore) -> io::Result<()> {
        writeln!(self.output, "\n--- MODIFY CREATURE ---")?;
        let name = self.ask("Name of the creature to modify: ")?.trim().to_string();
        let Some(current) = store.get(&name).cloned() else {
            return writeln!(self.output, "No creature found with the name {}.", name);
        };

        writeln!(self.output, "Modifying {}", current)?;
        writeln!(self.output, "Leave blank to keep the current value")?;

        let mut answers = Vec::with_capacity(PATCH_FIELDS.len());
        for field in PATCH_FIELDS {
            let answer = self.ask(&format!("{} [{}]: ", field_label(field), field_value(&current, field)))?;
            answers.push((field, answer));
        }
        let pairs: Vec<(&str, &str)> = answers
            .iter()
            .map(|(field, answer)| (*field, answer.as_str()))
            .collect();
        let patch = match parse_patch(&pairs) {
            Ok(patch) => patch,
            Err(e) => return writeln!(self.output, "Error: {}. No changes were made.", e),
        };

        if patch.is_empty() {
            return writeln!(self.output, "No changes were made.");
        }
        store.update(&name, &patch);
        writeln!(self.output, "Creature {} updated successfully!", name)
    }

    fn delete(&mut self, store: &mut CreatureStore) -> io::Result<()> {
        writeln!(self.output, "\n--- DELETE CREATURE ---")?;
        let name = self.ask("Name of the creature to delete: ")?.trim().to_string();
        if store.delete(&name) {
            writeln!(self.output, "Creature {} deleted successfully!", name)
        } else {
            writeln!(self.output, "No creature found with the name {}.", name)
        }
    }

    fn battle(&mut self, store: &mut CreatureStore, rng: &mut impl Rng) -> io::Result<()> {
        writeln!(self.output, "\n--- START BATTLE ---")?;
        if store.len() < MIN_BATTLE_PARTICIPANTS {
            return writeln!(
                self.output,
                "At least {} creatures are needed to start a battle.",
                MIN_BATTLE_PARTICIPANTS
            );
        }

        let names: Vec<String> = store.list_all().iter().map(|c| c.name.clone()).collect();

        writeln!(self.output, "Select the first creature:")?;
        for (i, name) in names.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, name)?;
        }
        let answer = self.ask("Number: ")?;
        let Some(first) = parse_selection(&answer, names.len()) else {
            return writeln!(self.output, "Invalid selection.");
        };

        writeln!(self.output, "\nSelect the second creature:")?;
        for (i, name) in names.iter().enumerate() {
            if i != first {
                writeln!(self.output, "{}. {}", i + 1, name)?;
            }
        }
        let answer = self.ask("Number: ")?;
        let second = match parse_selection(&answer, names.len()) {
            Some(second) if second != first => second,
            _ => return writeln!(self.output, "Invalid selection."),
        };

        writeln!(self.output, "\nBATTLE STARTED!")?;
        writeln!(self.output, "{} vs {}", names[first], names[second])?;
        // Commentary is written as the battle runs; the first write error stops output.
        let mut write_error = None;
        let result = store.battle_with(&names[first], &names[second], rng, |event| {
            if write_error.is_none() {
                if let Err(e) = writeln!(self.output, "{}", describe_event(event)) {
                    write_error = Some(e);
                }
            }
        });
        if let Some(e) = write_error {
            return Err(e);
        }
        match result {
            Ok(report) => {
                debug!(winner = %report.winner_name, rounds = report.rounds, "battle finished");
                Ok(())
            }
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn save(&mut self, store: &CreatureStore, roster_path: &Path) -> io::Result<()> {
        match store.save(roster_path) {
            Ok(()) => writeln!(
                self.output,
                "Roster saved to {} ({} creatures).",
                roster_path.display(),
                store.len()
            ),
            Err(e) => writeln!(self.output, "Error saving roster: {}", e),
        }
    }
}

fn field_label(field: &str) -> &'static str {
    match field {
        "type" => "Type",
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "sp_attack" => "Special Attack",
        "sp_defense" => "Special Defense",
        "speed" => "Speed",
        _ => "Value",
    }
}

fn field_value(creature: &Creature, field: &str) -> String {
    match field {
        "type" => creature.creature_type.clone(),
        "hp" => creature.max_health.to_string(),
        "attack" => creature.attack.to_string(),
        "defense" => creature.defense.to_string(),
        "sp_attack" => creature.special_attack.to_string(),
        "sp_defense" => creature.special_defense.to_string(),
        "speed" => creature.speed.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn store() -> CreatureStore {
        let mut store = CreatureStore::new();
        store.add(Creature::new("Pikachu", "Electric", 35, 55, 40, 50, 50, 90));
        store.add(Creature::new("Onix", "Rock", 35, 45, 160, 30, 45, 70));
        store
    }

    fn run_script(store: &mut CreatureStore, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        console
            .run(store, Path::new("unused.csv"), &mut rng)
            .unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_exit_and_eof() {
        let output = run_script(&mut store(), "0\n");
        assert!(output.contains("Thanks for playing!"));

        // End of input leaves the loop without the farewell
        let output = run_script(&mut store(), "");
        assert!(!output.contains("Thanks for playing!"));
    }

    #[test]
    fn test_list_all() {
        let output = run_script(&mut store(), "1\n0\n");
        assert!(output.contains("1. Pikachu (Type: Electric, HP: 35, Attack: 55, Defense: 40)"));
        assert!(output.contains("2. Onix"));
    }

    #[test]
    fn test_invalid_option() {
        let output = run_script(&mut store(), "7\n0\n");
        assert!(output.contains("Invalid option"));
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut store = store();
        let output = run_script(&mut store, "2\nOnix\n0\n");
        assert!(output.contains("already exists"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_non_numeric_stat_does_not_mutate() {
        let mut store = store();
        let output = run_script(&mut store, "2\nMew\nPsychic\n100\nstrong\n100\n100\n100\n100\n0\n");
        assert!(output.contains("must be numeric"));
        assert!(!store.contains("Mew"));
    }

    #[test]
    fn test_modify_blank_keeps_values() {
        let mut store = store();
        let output = run_script(&mut store, "3\nPikachu\n\n\n60\n\n\n\n\n0\n");
        assert!(output.contains("updated successfully"));
        let pikachu = store.get("Pikachu").unwrap();
        assert_eq!(pikachu.attack, 60);
        assert_eq!(pikachu.defense, 40);
        assert_eq!(pikachu.creature_type, "Electric");
    }

    #[test]
    fn test_modify_without_changes() {
        let mut store = store();
        let output = run_script(&mut store, "3\nPikachu\n\n\n\n\n\n\n\n0\n");
        assert!(output.contains("No changes were made."));
    }

    #[test]
    fn test_battle_invalid_selection() {
        let mut store = store();
        let output = run_script(&mut store, "5\n1\n1\n0\n");
        assert!(output.contains("Invalid selection."));
        let output = run_script(&mut store, "5\nabc\n0\n");
        assert!(output.contains("Invalid selection."));
    }

    #[test]
    fn test_battle_needs_two_creatures() {
        let mut store = store();
        store.delete("Onix");
        let output = run_script(&mut store, "5\n0\n");
        assert!(output.contains("At least 2 creatures"));
    }

    #[test]
    fn test_battle_commentary_streams_in_order() {
        let mut store = store();
        let output = run_script(&mut store, "5\n1\n2\n0\n");
        let started = output.find("BATTLE STARTED!").unwrap();
        let first = output.find("Pikachu moves first!").unwrap();
        let round_one = output.find("--- Round 1 ---").unwrap();
        let victory = output.find("wins the battle!").unwrap();
        assert!(started < first && first < round_one && round_one < victory);
        assert_eq!(output.matches("wins the battle!").count(), 1);
    }

    #[test]
    fn test_modify_rejects_unparsable_answer() {
        let mut store = store();
        let output = run_script(&mut store, "3\nPikachu\n\n\n-7\nhard\n\n\n\n0\n");
        assert!(output.contains("No changes were made."));
        assert_eq!(store.get("Pikachu").unwrap().attack, 55);
    }

    #[test]
    fn test_modify_accepts_negative_stat() {
        let mut store = store();
        let output = run_script(&mut store, "3\nPikachu\n\n\n-7\n\n\n\n\n0\n");
        assert!(output.contains("updated successfully"));
        assert_eq!(store.get("Pikachu").unwrap().attack, -7);
    }

    #[test]
    fn test_describe_attack_event() {
        let text = describe_event(&BattleEvent::Attack {
            round: 3,
            attacker: "Pikachu",
            defender: "Onix",
            damage: 2,
            defender_health: 33,
            defender_max_health: 35,
        });
        assert!(text.contains("--- Round 3 ---"));
        assert!(text.contains("Pikachu attacks Onix and deals 2 damage!"));
        assert!(text.contains("Onix: HP remaining = 33/35"));
    }
}
