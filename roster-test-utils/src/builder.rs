//! Declarative test builder.
//!
//! Queue up seed records and failure modes, then call `build()` for a ready [`TestSetup`].

use roster::model::character::Character;

use crate::{fixtures::factory, MockCharacterApi, RecordingToaster, TestSetup};

#[derive(Default)]
pub struct TestBuilder {
    characters: Vec<Character>,
    fail_list: bool,
    fail_mutations: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one record into the collection.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Seed `count` records with ids `1..=count` from [`factory::mock_character`].
    pub fn with_mock_characters(mut self, count: i64) -> Self {
        let start = self.characters.len() as i64 + 1;
        self.characters
            .extend((start..start + count).map(factory::mock_character));
        self
    }

    /// Make every `GET /characters` fail with a 500.
    pub fn with_failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make every create, update, and delete fail with a 500.
    pub fn with_failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub fn build(self) -> TestSetup {
        let api = MockCharacterApi::new(self.characters);
        api.set_fail_list(self.fail_list);
        api.set_fail_mutations(self.fail_mutations);

        TestSetup {
            api,
            toaster: RecordingToaster::default(),
        }
    }
}
