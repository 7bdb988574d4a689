//! Utility functions shared by the board and the card components.

pub mod time;
