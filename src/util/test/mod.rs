//! Test helpers shared by in-crate unit tests.

pub mod gateway;
