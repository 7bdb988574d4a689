//! Tests for the create form workflow.

use chrono::{TimeZone, Utc};
use dioxus_logger::tracing::Level;
use roster::{
    error::Error,
    model::character::NewCharacter,
    service::{roster::CHARACTER_ADDED, CharacterBoard, CreateForm},
};

use super::*;

/// Tests submitting a fully filled form.
///
/// Verifies that exactly one create request carries the literal entered values and the
/// submit timestamp, followed by exactly one list refresh that includes the new record.
/// Afterwards the form is cleared.
///
/// Expected: Ok with [Create, List] requests, one toast, and an empty form
#[tokio::test]
async fn creates_with_literal_values_then_refreshes_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_characters(2).build();
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap();
    let mut form = factory::filled_form();

    let refreshed = test.service().create(&form, now).await?;

    assert_eq!(
        test.api.requests(),
        vec![
            ApiRequest::Create(NewCharacter {
                name: "Muradin".to_string(),
                race: "Dwarf".to_string(),
                age: 412,
                class_name: "Warrior".to_string(),
                lore: "Brother of the king under the mountain".to_string(),
                timestamp: now,
            }),
            ApiRequest::List,
        ]
    );
    assert_eq!(test.toaster.messages(), vec![CHARACTER_ADDED.to_string()]);

    let mut board = CharacterBoard::default();
    form.finish_submit(&mut board, refreshed);
    assert_eq!(form, CreateForm::default());
    assert_eq!(board.len(), 3);
    assert_eq!(board.cards()[2].fields().name, "Muradin");

    Ok(())
}

/// Tests submitting with the class radio unselected.
///
/// Expected: Err(MissingFormField("class")) with an error logged, no request and no toast
#[tokio::test]
async fn unselected_class_makes_no_request() {
    let test = TestBuilder::new().with_mock_characters(2).build();
    let logs = LogCapture::start();
    let form = CreateForm {
        class: None,
        ..factory::filled_form()
    };

    let result = test.service().create(&form, Utc::now()).await;

    assert!(matches!(result, Err(Error::MissingFormField("class"))));
    assert_eq!(
        logs.count(
            Level::ERROR,
            "Create form is missing a value for field: class"
        ),
        1
    );
    assert!(test.api.requests().is_empty());
    assert!(test.toaster.messages().is_empty());
}

/// Tests submitting a blank form.
///
/// Expected: Err(MissingFormField) with no request
#[tokio::test]
async fn blank_form_makes_no_request() {
    let test = TestBuilder::new().build();

    let result = test
        .service()
        .create(&CreateForm::default(), Utc::now())
        .await;

    assert!(matches!(result, Err(Error::MissingFormField(_))));
    assert!(test.api.requests().is_empty());
}

/// Tests a rejected create request.
///
/// Verifies that no refresh follows and no toast is shown, leaving the form for the caller
/// to keep.
///
/// Expected: Err with only the create request issued
#[tokio::test]
async fn failed_create_skips_refresh_and_toast() {
    let test = TestBuilder::new().with_failing_mutations().build();

    let result = test
        .service()
        .create(&factory::filled_form(), Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(Error::UnexpectedStatus { status: 500, .. })
    ));
    assert_eq!(test.api.list_count(), 0);
    assert!(test.toaster.messages().is_empty());
}

/// Tests a successful create whose refresh fails.
///
/// Verifies the create still counts as done: the toast is shown and the caller gets `None`
/// so its board stays as it was.
///
/// Expected: Ok(None) with a toast
#[tokio::test]
async fn created_but_refresh_failed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_failing_list().build();

    let refreshed = test
        .service()
        .create(&factory::filled_form(), Utc::now())
        .await?;

    assert!(refreshed.is_none());
    assert_eq!(test.api.records().len(), 1);
    assert_eq!(test.toaster.messages(), vec![CHARACTER_ADDED.to_string()]);

    Ok(())
}
