//! Mutation workflows for the character list.
//!
//! Every mutation follows the same shape: issue the request, confirm it with a toast, then
//! re-fetch the whole collection. The refreshed records are handed back to the caller, which
//! replaces the board with them. Nothing is patched in place.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::character::{Character, CharacterId, CharacterUpdate},
    service::{form::CreateForm, CharacterApi, Toaster},
};

pub const CHARACTER_ADDED: &str = "Character has been added";
pub const CHARACTER_UPDATED: &str = "Character has been updated";
pub const CHARACTER_REMOVED: &str = "Character has been removed";

#[derive(Debug, Clone)]
pub struct RosterService<A, T> {
    api: A,
    toaster: T,
}

impl<A: CharacterApi, T: Toaster> RosterService<A, T> {
    pub fn new(api: A, toaster: T) -> Self {
        Self { api, toaster }
    }

    /// Fetches the full collection.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - Every record, in server order
    /// - `Err(Error)` - Request or decoding failed; the caller keeps its current board
    pub async fn synchronize(&self) -> Result<Vec<Character>, Error> {
        let records = self.api.list().await?;

        tracing::debug!("Fetched {} characters", records.len());

        Ok(records)
    }

    /// Follow-up fetch after a successful mutation. A failure is logged and yields `None`
    /// since the mutation itself already went through.
    async fn refresh(&self) -> Option<Vec<Character>> {
        match self.synchronize().await {
            Ok(records) => Some(records),
            Err(err) => {
                tracing::error!("Failed to refresh character list: {}", err);
                None
            }
        }
    }

    /// Deletes a record, then refreshes the list.
    ///
    /// # Returns
    /// - `Ok(Some(records))` - Deleted and refreshed
    /// - `Ok(None)` - Deleted, but the refresh failed
    /// - `Err(Error)` - The delete request failed; nothing was refreshed
    pub async fn delete(&self, id: &CharacterId) -> Result<Option<Vec<Character>>, Error> {
        self.api.delete(id).await?;
        self.toaster.show(CHARACTER_REMOVED);

        Ok(self.refresh().await)
    }

    /// Sends a card's edited fields, then refreshes the list.
    ///
    /// The caller should return the card to read-only display once this succeeds.
    pub async fn save(
        &self,
        id: &CharacterId,
        update: &CharacterUpdate,
    ) -> Result<Option<Vec<Character>>, Error> {
        self.api.update(id, update).await?;
        self.toaster.show(CHARACTER_UPDATED);

        Ok(self.refresh().await)
    }

    /// Posts the create form, then refreshes the list.
    ///
    /// A form with a missing field is logged and rejected before any request is made. The
    /// caller should clear the form once this succeeds.
    pub async fn create(
        &self,
        form: &CreateForm,
        now: DateTime<Utc>,
    ) -> Result<Option<Vec<Character>>, Error> {
        let new_character = match form.to_new_character(now) {
            Ok(new_character) => new_character,
            Err(err) => {
                tracing::error!("Create form incomplete: {}", err);
                return Err(err);
            }
        };

        self.api.create(&new_character).await?;
        self.toaster.show(CHARACTER_ADDED);

        Ok(self.refresh().await)
    }
}
