//! Business logic layer.
//!
//! Services coordinate repositories and the Discord gateway. They contain no direct
//! database queries or entity conversions; those belong to the data layer.

pub mod medal_emotes;
pub mod player_message;
pub mod render;
pub mod settings;
