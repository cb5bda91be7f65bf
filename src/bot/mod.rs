//! Discord bot integration.
//!
//! - `gateway` - Discord operations the task queue uses, behind a trait
//! - `handler` - Gateway event handler that starts the queue consumer
//! - `start` - Client construction and the blocking bot runner

pub mod gateway;
pub mod handler;
pub mod start;
