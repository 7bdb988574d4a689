pub mod api;
pub mod character;
pub mod class;
pub mod race;
