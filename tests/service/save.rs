//! Tests for the edit and save control workflow.

use chrono::{TimeZone, Utc};
use roster::{
    model::character::{Age, CharacterId},
    service::{roster::CHARACTER_UPDATED, CharacterBoard, Field},
};

use super::*;

/// Tests editing then saving the card at index 2.
///
/// Verifies the update targets that card's id with whatever text is currently in its five
/// fields, and that afterwards the card is read-only and shows the saved values.
///
/// Expected: Ok with [Update, List] requests and a read-only card
#[tokio::test]
async fn edit_then_save_sends_current_field_text() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_characters(4).build();
    let service = test.service();
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap();
    let mut board = CharacterBoard::default();
    board.replace(service.synchronize().await?);
    test.api.clear_requests();

    board.begin_edit(2)?;
    board.edit_field(2, Field::Name, "Velen".to_string())?;
    board.edit_field(2, Field::Race, "Draenei".to_string())?;
    board.edit_field(2, Field::Age, "twenty-five thousand".to_string())?;
    board.edit_field(2, Field::Lore, "Prophet".to_string())?;
    let (id, update) = board.save_request(2, now)?;

    let refreshed = service.save(&id, &update).await?;
    board.complete_save(2, refreshed)?;

    let requests = test.api.requests();
    assert_eq!(requests.len(), 2);
    match &requests[0] {
        ApiRequest::Update(id, update) => {
            assert_eq!(id, &CharacterId::Number(3));
            assert_eq!(update.name, "Velen");
            assert_eq!(update.race, "Draenei");
            assert_eq!(update.age, "twenty-five thousand");
            assert_eq!(update.class_name, factory::mock_character(3).class_name);
            assert_eq!(update.lore, "Prophet");
            assert_eq!(update.timestamp, now);
        }
        other => panic!("expected an update request, got {:?}", other),
    }
    assert_eq!(requests[1], ApiRequest::List);

    let card = &board.cards()[2];
    assert!(!card.is_editing());
    assert_eq!(card.fields().name, "Velen");
    assert_eq!(
        card.record().age,
        Age::Text("twenty-five thousand".to_string())
    );
    assert_eq!(test.toaster.messages(), vec![CHARACTER_UPDATED.to_string()]);

    Ok(())
}

/// Tests saving a card without changing anything.
///
/// Expected: Ok with the unchanged values sent back
#[tokio::test]
async fn save_without_changes_resends_record() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_characters(1).build();
    let service = test.service();
    let mut board = CharacterBoard::default();
    board.replace(service.synchronize().await?);

    board.begin_edit(0)?;
    let (id, update) = board.save_request(0, Utc::now())?;
    service.save(&id, &update).await?;

    let original = factory::mock_character(1);
    assert_eq!(update.name, original.name);
    assert_eq!(update.age, original.age.to_string());
    assert_eq!(update.lore, original.lore);

    Ok(())
}

/// Tests a rejected update.
///
/// Verifies no refresh follows, so the caller keeps the card in its editing state.
///
/// Expected: Err with only the update request issued
#[tokio::test]
async fn failed_save_keeps_card_editing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_characters(3)
        .with_failing_mutations()
        .build();
    let service = test.service();
    let mut board = CharacterBoard::default();
    board.replace(service.synchronize().await?);
    test.api.clear_requests();

    board.begin_edit(1)?;
    let (id, update) = board.save_request(1, Utc::now())?;
    let result = service.save(&id, &update).await;

    assert!(result.is_err());
    assert_eq!(test.api.list_count(), 0);
    assert!(board.cards()[1].is_editing());
    assert!(test.toaster.messages().is_empty());

    Ok(())
}
