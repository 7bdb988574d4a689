use std::fmt;

/// Classes offered by the create form's radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    Shaman,
    Mage,
    Warlock,
    Monk,
    Druid,
    DeathKnight,
    DemonHunter,
    Evoker,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 13] = [
        CharacterClass::Warrior,
        CharacterClass::Paladin,
        CharacterClass::Hunter,
        CharacterClass::Rogue,
        CharacterClass::Priest,
        CharacterClass::Shaman,
        CharacterClass::Mage,
        CharacterClass::Warlock,
        CharacterClass::Monk,
        CharacterClass::Druid,
        CharacterClass::DeathKnight,
        CharacterClass::DemonHunter,
        CharacterClass::Evoker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Paladin => "Paladin",
            Self::Hunter => "Hunter",
            Self::Rogue => "Rogue",
            Self::Priest => "Priest",
            Self::Shaman => "Shaman",
            Self::Mage => "Mage",
            Self::Warlock => "Warlock",
            Self::Monk => "Monk",
            Self::Druid => "Druid",
            Self::DeathKnight => "Death Knight",
            Self::DemonHunter => "Demon Hunter",
            Self::Evoker => "Evoker",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
