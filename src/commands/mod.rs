// src/commands/mod.rs
//
// View-state holders: each screen reads its state through these functions and
// gets back a serializable snapshot.

mod dtos;
pub mod focus;
pub mod home;
pub mod onboarding;
pub mod settings;
pub mod stats;
pub mod tasks;

pub use dtos::*;
