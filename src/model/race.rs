use std::fmt;

use dioxus_logger::tracing;

/// Races offered by the create form, each with a portrait under `assets/images`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
    NightElf,
    Dwarf,
    Human,
    Worgen,
    Draenei,
    Gnome,
}

impl Race {
    pub const ALL: [Race; 6] = [
        Race::NightElf,
        Race::Dwarf,
        Race::Human,
        Race::Worgen,
        Race::Draenei,
        Race::Gnome,
    ];

    /// Name stored in the record, e.g. `"NightElf"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NightElf => "NightElf",
            Self::Dwarf => "Dwarf",
            Self::Human => "Human",
            Self::Worgen => "Worgen",
            Self::Draenei => "Draenei",
            Self::Gnome => "Gnome",
        }
    }

    /// Human-readable label for the race select.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NightElf => "Night Elf",
            other => other.as_str(),
        }
    }

    pub fn image_path(&self) -> &'static str {
        match self {
            Self::NightElf => "assets/images/NightElf.png",
            Self::Dwarf => "assets/images/Dwarf.png",
            Self::Human => "assets/images/Human.png",
            Self::Worgen => "assets/images/Worgen.png",
            Self::Draenei => "assets/images/Draenei.png",
            Self::Gnome => "assets/images/Gnome.png",
        }
    }

    /// Exact, case-sensitive lookup by stored name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|race| race.as_str() == name)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a record's race string to its portrait path.
///
/// # Returns
/// - `Some(path)` - Race is one of [`Race::ALL`]
/// - `None` - Unmapped race; an error is logged and the card renders without an image
pub fn race_image(race: &str) -> Option<&'static str> {
    match Race::from_name(race) {
        Some(race) => Some(race.image_path()),
        None => {
            tracing::error!("No image found for {}", race);
            None
        }
    }
}
