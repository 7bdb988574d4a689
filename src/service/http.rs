use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        character::{Character, CharacterId, CharacterUpdate, NewCharacter},
    },
    service::CharacterApi,
};

/// [`CharacterApi`] over the browser's fetch API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpCharacterApi {
    base_url: String,
}

impl HttpCharacterApi {
    /// # Arguments
    /// - `base_url` - API root without a trailing slash, e.g. `http://localhost:3004`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/characters", self.base_url)
    }

    pub fn item_url(&self, id: &CharacterId) -> String {
        format!("{}/characters/{}", self.base_url, id)
    }
}

impl CharacterApi for HttpCharacterApi {
    async fn list(&self) -> Result<Vec<Character>, Error> {
        let response = Request::get(&self.collection_url()).send().await?;

        parse_json(response).await
    }

    async fn create(&self, character: &NewCharacter) -> Result<Character, Error> {
        let body = serde_json::to_string(character)?;
        let response = Request::post(&self.collection_url())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn update(
        &self,
        id: &CharacterId,
        character: &CharacterUpdate,
    ) -> Result<Character, Error> {
        let body = serde_json::to_string(character)?;
        let response = Request::put(&self.item_url(id))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn delete(&self, id: &CharacterId) -> Result<(), Error> {
        let response = Request::delete(&self.item_url(id)).send().await?;

        if response.ok() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    if !response.ok() {
        return Err(status_error(response).await);
    }

    Ok(response.json::<T>().await?)
}

/// Builds an [`Error::UnexpectedStatus`], preferring the API's `ErrorDto` message over the raw
/// body text.
async fn status_error(response: Response) -> Error {
    let status = response.status();

    let body = match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorDto>(&text) {
            Ok(error_dto) => error_dto.error,
            Err(_) => text,
        },
        Err(_) => "Unknown error".to_string(),
    };

    Error::UnexpectedStatus { status, body }
}
