use chrono::{DateTime, TimeZone, Utc};
use roster::{
    model::{
        character::{Age, Character, CharacterId},
        class::CharacterClass,
        race::Race,
    },
    service::CreateForm,
};

/// Fixed instant the mock records were last touched.
pub fn mock_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Create a mock character with default test values.
///
/// Race and class rotate through the known sets by id, so consecutive ids differ.
///
/// # Arguments
/// - `id` - Numeric id of the record
pub fn mock_character(id: i64) -> Character {
    let race = Race::ALL[(id.unsigned_abs() as usize) % Race::ALL.len()];
    let class = CharacterClass::ALL[(id.unsigned_abs() as usize) % CharacterClass::ALL.len()];

    Character {
        id: CharacterId::Number(id),
        name: format!("Character {}", id),
        race: race.as_str().to_string(),
        age: Age::Years(20 + id),
        class_name: class.as_str().to_string(),
        lore: format!("Lore for character {}", id),
        timestamp: Some(mock_timestamp()),
    }
}

/// Create a mock character of a specific race, which may be outside [`Race::ALL`].
pub fn mock_character_with_race(id: i64, race: &str) -> Character {
    Character {
        race: race.to_string(),
        ..mock_character(id)
    }
}

/// A create form with every field filled in.
pub fn filled_form() -> CreateForm {
    CreateForm {
        name: "Muradin".to_string(),
        race: Some(Race::Dwarf),
        age: "412".to_string(),
        class: Some(CharacterClass::Warrior),
        lore: "Brother of the king under the mountain".to_string(),
    }
}
