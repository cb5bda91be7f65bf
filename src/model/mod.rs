//! Domain models and parameter types.
//!
//! Entity models are converted into these types at the repository boundary so that the
//! queue handlers and rendering services never touch SeaORM models directly.

pub mod player;
pub mod settings;
pub mod task;
pub mod tracked_message;
pub mod unit;
