//! Tests for the list synchronizer.

use dioxus_logger::tracing::Level;
use roster::{
    model::character::{Age, Character, CharacterId},
    service::CharacterBoard,
};
use serde_json::json;

use super::*;

/// Tests drawing a fetched collection.
///
/// Verifies that every returned record becomes exactly one card showing its name, race,
/// age, class, and lore verbatim, in server order.
///
/// Expected: Ok with one card per record
#[tokio::test]
async fn renders_one_card_per_record() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_characters(7).build();
    let mut board = CharacterBoard::default();

    let records = test.service().synchronize().await?;
    board.replace(records);

    let expected = test.api.records();
    assert_eq!(board.len(), 7);
    for (card, record) in board.cards().iter().zip(&expected) {
        assert_eq!(card.fields().name, record.name);
        assert_eq!(card.fields().race, record.race);
        assert_eq!(card.fields().age, record.age.to_string());
        assert_eq!(card.fields().class_name, record.class_name);
        assert_eq!(card.fields().lore, record.lore);
    }
    assert_eq!(test.api.requests(), vec![ApiRequest::List]);

    Ok(())
}

/// Tests drawing an empty collection.
///
/// Expected: Ok with an empty board
#[tokio::test]
async fn renders_empty_collection() -> Result<(), TestError> {
    let test = TestBuilder::new().build();
    let mut board = CharacterBoard::default();

    board.replace(test.service().synchronize().await?);

    assert!(board.is_empty());

    Ok(())
}

/// Tests that records with unmapped races still render.
///
/// Expected: Ok with a card for the unmapped race and no image
#[tokio::test]
async fn renders_record_with_unmapped_race() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::mock_character_with_race(1, "Pandaren"))
        .with_character(factory::mock_character_with_race(2, "Dwarf"))
        .build();
    let mut board = CharacterBoard::default();

    board.replace(test.service().synchronize().await?);

    assert_eq!(board.len(), 2);
    assert_eq!(board.cards()[0].image(), None);
    assert_eq!(
        board.cards()[1].image(),
        Some("assets/images/Dwarf.png")
    );
    assert_eq!(board.delete_target(0)?, CharacterId::Number(1));

    Ok(())
}

/// Tests that an unmapped race is reported once per draw.
///
/// Verifies the error is logged when the card is drawn, not again each time the card is
/// rendered afterwards.
///
/// Expected: Ok with exactly one "No image found for Orc" error
#[tokio::test]
async fn logs_unmapped_race_once_per_draw() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::mock_character_with_race(1, "Orc"))
        .with_character(factory::mock_character_with_race(2, "Gnome"))
        .build();
    let logs = LogCapture::start();
    let mut board = CharacterBoard::default();

    board.replace(test.service().synchronize().await?);
    let card = board.card(0)?;
    assert_eq!(card.image(), None);
    assert_eq!(card.image(), None);

    assert_eq!(logs.count(Level::ERROR, "No image found for Orc"), 1);
    assert_eq!(logs.count(Level::ERROR, "No image found for Gnome"), 0);

    Ok(())
}

/// Tests records whose age is neither an integer nor text.
///
/// Expected: Ok with one card per record, ages shown as stored
#[tokio::test]
async fn renders_records_with_odd_ages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(Character {
            age: Age::default(),
            ..factory::mock_character(1)
        })
        .with_character(Character {
            age: Age::Other(json!(350.5)),
            ..factory::mock_character(2)
        })
        .with_character(factory::mock_character(3))
        .build();
    let mut board = CharacterBoard::default();

    board.replace(test.service().synchronize().await?);

    let ages: Vec<&str> = board
        .cards()
        .iter()
        .map(|card| card.fields().age.as_str())
        .collect();
    assert_eq!(ages, vec!["null", "350.5", "23"]);

    Ok(())
}

/// Tests a failed fetch.
///
/// Verifies the failure is returned to the caller and nothing is toasted, so the board the
/// caller holds stays as it was.
///
/// Expected: Err with no toast
#[tokio::test]
async fn fails_when_list_request_fails() {
    let test = TestBuilder::new()
        .with_mock_characters(2)
        .with_failing_list()
        .build();

    let result = test.service().synchronize().await;

    assert!(result.is_err());
    assert!(test.toaster.messages().is_empty());
}
