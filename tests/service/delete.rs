//! Tests for the delete control workflow.

use roster::{
    error::Error,
    model::character::CharacterId,
    service::{roster::CHARACTER_REMOVED, CharacterBoard},
};

use super::*;

/// Tests deleting the record behind a card.
///
/// Verifies the delete targets the id of the card at the clicked position, the list is
/// refreshed once, and the removed record no longer renders.
///
/// Expected: Ok with [Delete, List] requests and one toast
#[tokio::test]
async fn deletes_record_at_position_then_refreshes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_characters(3).build();
    let service = test.service();
    let mut board = CharacterBoard::default();
    board.replace(service.synchronize().await?);
    test.api.clear_requests();

    let id = board.delete_target(1)?;
    let refreshed = service.delete(&id).await?;
    board.apply(refreshed);

    assert_eq!(
        test.api.requests(),
        vec![
            ApiRequest::Delete(CharacterId::Number(2)),
            ApiRequest::List
        ]
    );
    assert_eq!(board.len(), 2);
    assert!(board
        .cards()
        .iter()
        .all(|card| card.record().id != CharacterId::Number(2)));
    assert_eq!(test.toaster.messages(), vec![CHARACTER_REMOVED.to_string()]);

    Ok(())
}

/// Tests deleting a record another client already removed.
///
/// Expected: Err(UnexpectedStatus 404) with no refresh and no toast
#[tokio::test]
async fn missing_record_is_an_error() {
    let test = TestBuilder::new().with_mock_characters(1).build();

    let result = test.service().delete(&CharacterId::Number(99)).await;

    assert!(matches!(
        result,
        Err(Error::UnexpectedStatus { status: 404, .. })
    ));
    assert_eq!(test.api.list_count(), 0);
    assert!(test.toaster.messages().is_empty());
}
