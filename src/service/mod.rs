//! Character roster services.
//!
//! This module holds everything the UI needs besides rendering: the [`CharacterApi`] seam to
//! the REST collection, the [`Toaster`] seam for confirmations, the board state the cards are
//! drawn from, the create form, and [`roster::RosterService`] which strings a mutation and
//! the follow-up list refresh together.

pub mod board;
pub mod form;
pub mod http;
pub mod roster;

use crate::{
    error::Error,
    model::character::{Character, CharacterId, CharacterUpdate, NewCharacter},
};

pub use board::{CharacterBoard, CharacterCard, CharacterFields, Field};
pub use form::CreateForm;
pub use http::HttpCharacterApi;
pub use roster::RosterService;

/// CRUD access to the `characters` collection.
///
/// Futures are not required to be `Send`; the browser runs every request on the UI thread.
#[allow(async_fn_in_trait)]
pub trait CharacterApi {
    /// `GET /characters`
    async fn list(&self) -> Result<Vec<Character>, Error>;

    /// `POST /characters`
    async fn create(&self, character: &NewCharacter) -> Result<Character, Error>;

    /// `PUT /characters/{id}`
    async fn update(&self, id: &CharacterId, character: &CharacterUpdate)
        -> Result<Character, Error>;

    /// `DELETE /characters/{id}`
    async fn delete(&self, id: &CharacterId) -> Result<(), Error>;
}

/// Displays a transient confirmation message.
pub trait Toaster {
    fn show(&self, message: &str);
}
