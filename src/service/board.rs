//! Rendered state of the character list.
//!
//! The board is rebuilt from scratch after every fetch. Cards are addressed by their position
//! in the last fetched collection, the same index the card controls are rendered with.

use chrono::{DateTime, Utc};

use crate::{
    error::Error,
    model::{
        character::{Character, CharacterId, CharacterUpdate},
        race::race_image,
    },
    util::time::format_relative_time,
};

/// One of the five text fields a card lets the user edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Race,
    Age,
    Class,
    Lore,
}

/// Text currently shown in a card's five fields.
///
/// While a card is read-only this mirrors its record. Once editing begins it is the live
/// text the user types into, and saving sends it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterFields {
    pub name: String,
    pub race: String,
    pub age: String,
    pub class_name: String,
    pub lore: String,
}

impl CharacterFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Race => &self.race,
            Field::Age => &self.age,
            Field::Class => &self.class_name,
            Field::Lore => &self.lore,
        }
    }

    pub fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Name => self.name = text,
            Field::Race => self.race = text,
            Field::Age => self.age = text,
            Field::Class => self.class_name = text,
            Field::Lore => self.lore = text,
        }
    }
}

impl From<&Character> for CharacterFields {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            race: character.race.clone(),
            age: character.age.to_string(),
            class_name: character.class_name.clone(),
            lore: character.lore.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCard {
    record: Character,
    fields: CharacterFields,
    image: Option<&'static str>,
    editing: bool,
}

impl CharacterCard {
    /// Draws a read-only card, resolving the race portrait once.
    pub fn new(record: Character) -> Self {
        let fields = CharacterFields::from(&record);
        let image = race_image(&record.race);

        Self {
            record,
            fields,
            image,
            editing: false,
        }
    }

    pub fn record(&self) -> &Character {
        &self.record
    }

    pub fn fields(&self) -> &CharacterFields {
        &self.fields
    }

    /// Whether the fields are editable, the edit control hidden, and the save control shown.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Portrait for the record's race, `None` when unmapped.
    pub fn image(&self) -> Option<&'static str> {
        self.image
    }

    pub fn relative_timestamp(&self, now: DateTime<Utc>) -> String {
        format_relative_time(self.record.timestamp_or_epoch(), now)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterBoard {
    cards: Vec<CharacterCard>,
}

impl CharacterBoard {
    /// Discards every card, including any unsaved edits, and draws one read-only card per
    /// record in server order.
    pub fn replace(&mut self, records: Vec<Character>) {
        self.cards = records.into_iter().map(CharacterCard::new).collect();
    }

    /// Replaces the board with a refreshed collection; `None` leaves it as it was.
    pub fn apply(&mut self, refreshed: Option<Vec<Character>>) {
        if let Some(records) = refreshed {
            self.replace(records);
        }
    }

    pub fn cards(&self) -> &[CharacterCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Result<&CharacterCard, Error> {
        self.cards.get(index).ok_or(Error::CardNotFound(index))
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut CharacterCard, Error> {
        self.cards.get_mut(index).ok_or(Error::CardNotFound(index))
    }

    /// Identifier the delete control at `index` targets.
    pub fn delete_target(&self, index: usize) -> Result<CharacterId, Error> {
        Ok(self.card(index)?.record.id.clone())
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<(), Error> {
        self.card_mut(index)?.editing = true;
        Ok(())
    }

    /// Writes typed text into one field of the card at `index`.
    pub fn edit_field(&mut self, index: usize, field: Field, text: String) -> Result<(), Error> {
        self.card_mut(index)?.fields.set(field, text);
        Ok(())
    }

    /// Reads the current text of the card's five fields into an update stamped with `now`.
    pub fn save_request(
        &self,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<(CharacterId, CharacterUpdate), Error> {
        let card = self.card(index)?;
        let fields = card.fields.clone();

        Ok((
            card.record.id.clone(),
            CharacterUpdate {
                name: fields.name,
                race: fields.race,
                age: fields.age,
                class_name: fields.class_name,
                lore: fields.lore,
                timestamp: now,
            },
        ))
    }

    /// Returns the card at `index` to read-only display.
    pub fn finish_edit(&mut self, index: usize) -> Result<(), Error> {
        self.card_mut(index)?.editing = false;
        Ok(())
    }

    /// Runs after a successful save of the card at `index`: the card goes back to read-only,
    /// then the refreshed records (if any) replace the board.
    ///
    /// The refresh is applied even when `index` no longer points at a card.
    pub fn complete_save(
        &mut self,
        index: usize,
        refreshed: Option<Vec<Character>>,
    ) -> Result<(), Error> {
        let finished = self.finish_edit(index);
        self.apply(refreshed);
        finished
    }
}
