//! In-memory characters collection.
//!
//! `MockCharacterApi` behaves like a minimal REST server for the `characters` collection and
//! records every request it receives, so tests can assert both on the resulting collection
//! and on exactly which calls were made.

use std::{cell::RefCell, rc::Rc};

use roster::{
    error::Error,
    model::character::{Age, Character, CharacterId, CharacterUpdate, NewCharacter},
    service::CharacterApi,
};

/// A request received by [`MockCharacterApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    List,
    Create(NewCharacter),
    Update(CharacterId, CharacterUpdate),
    Delete(CharacterId),
}

#[derive(Debug, Default)]
struct MockState {
    records: Vec<Character>,
    next_id: i64,
    requests: Vec<ApiRequest>,
    fail_list: bool,
    fail_mutations: bool,
}

/// Shared handle to an in-memory collection; clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct MockCharacterApi {
    state: Rc<RefCell<MockState>>,
}

impl MockCharacterApi {
    /// Create a collection seeded with `records`.
    ///
    /// Newly created records get numeric ids following the highest numeric id seeded.
    pub fn new(records: Vec<Character>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|record| match record.id {
                CharacterId::Number(id) => Some(id),
                CharacterId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            state: Rc::new(RefCell::new(MockState {
                records,
                next_id,
                ..Default::default()
            })),
        }
    }

    /// Current contents of the collection.
    pub fn records(&self) -> Vec<Character> {
        self.state.borrow().records.clone()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn list_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|request| matches!(request, ApiRequest::List))
            .count()
    }

    pub fn clear_requests(&self) {
        self.state.borrow_mut().requests.clear();
    }

    /// Make `GET /characters` answer 500.
    pub fn set_fail_list(&self, fail: bool) {
        self.state.borrow_mut().fail_list = fail;
    }

    /// Make `POST`, `PUT`, and `DELETE` answer 500.
    pub fn set_fail_mutations(&self, fail: bool) {
        self.state.borrow_mut().fail_mutations = fail;
    }

    fn record(&self, request: ApiRequest) {
        self.state.borrow_mut().requests.push(request);
    }
}

fn server_error() -> Error {
    Error::UnexpectedStatus {
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

fn not_found() -> Error {
    Error::UnexpectedStatus {
        status: 404,
        body: "Not Found".to_string(),
    }
}

impl CharacterApi for MockCharacterApi {
    async fn list(&self) -> Result<Vec<Character>, Error> {
        self.record(ApiRequest::List);

        let state = self.state.borrow();
        if state.fail_list {
            return Err(server_error());
        }

        Ok(state.records.clone())
    }

    async fn create(&self, character: &NewCharacter) -> Result<Character, Error> {
        self.record(ApiRequest::Create(character.clone()));

        let mut state = self.state.borrow_mut();
        if state.fail_mutations {
            return Err(server_error());
        }

        let created = Character {
            id: CharacterId::Number(state.next_id),
            name: character.name.clone(),
            race: character.race.clone(),
            age: Age::Years(character.age),
            class_name: character.class_name.clone(),
            lore: character.lore.clone(),
            timestamp: Some(character.timestamp),
        };
        state.next_id += 1;
        state.records.push(created.clone());

        Ok(created)
    }

    async fn update(
        &self,
        id: &CharacterId,
        character: &CharacterUpdate,
    ) -> Result<Character, Error> {
        self.record(ApiRequest::Update(id.clone(), character.clone()));

        let mut state = self.state.borrow_mut();
        if state.fail_mutations {
            return Err(server_error());
        }

        let record = state
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(not_found)?;

        record.name = character.name.clone();
        record.race = character.race.clone();
        record.age = Age::Text(character.age.clone());
        record.class_name = character.class_name.clone();
        record.lore = character.lore.clone();
        record.timestamp = Some(character.timestamp);

        Ok(record.clone())
    }

    async fn delete(&self, id: &CharacterId) -> Result<(), Error> {
        self.record(ApiRequest::Delete(id.clone()));

        let mut state = self.state.borrow_mut();
        if state.fail_mutations {
            return Err(server_error());
        }

        let before = state.records.len();
        state.records.retain(|record| &record.id != id);
        if state.records.len() == before {
            return Err(not_found());
        }

        Ok(())
    }
}
