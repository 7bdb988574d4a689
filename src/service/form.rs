use chrono::{DateTime, Utc};

use crate::{
    error::Error,
    model::{
        character::{Character, NewCharacter},
        class::CharacterClass,
        race::Race,
    },
    service::board::CharacterBoard,
};

/// Values held by the create form.
///
/// Text inputs are always present, even when empty. The race select and class radio group
/// are `None` until the user picks something, and the age input must hold an integer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub name: String,
    pub race: Option<Race>,
    pub age: String,
    pub class: Option<CharacterClass>,
    pub lore: String,
}

impl CreateForm {
    /// Builds the `POST /characters` body, stamped with `now`.
    ///
    /// # Returns
    /// - `Ok(NewCharacter)` - Every field has a value
    /// - `Err(Error::MissingFormField)` - Race or class unselected, or age empty or not an integer
    pub fn to_new_character(&self, now: DateTime<Utc>) -> Result<NewCharacter, Error> {
        let race = self.race.ok_or(Error::MissingFormField("race"))?;
        let class = self.class.ok_or(Error::MissingFormField("class"))?;
        let age = self
            .age
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::MissingFormField("age"))?;

        Ok(NewCharacter {
            name: self.name.clone(),
            race: race.as_str().to_string(),
            age,
            class_name: class.as_str().to_string(),
            lore: self.lore.clone(),
            timestamp: now,
        })
    }

    /// Resets every input, unselecting race and class.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Runs after a successful post: the form is cleared, then the refreshed records (if
    /// any) replace the board.
    pub fn finish_submit(
        &mut self,
        board: &mut CharacterBoard,
        refreshed: Option<Vec<Character>>,
    ) {
        self.clear();
        board.apply(refreshed);
    }
}
