// src/lib.rs

pub mod analysis;
pub mod breach;
pub mod core;
pub mod generators;
pub mod history;
pub mod models;

pub use crate::analysis::analyze;
pub use crate::breach::{BreachChecker, BreachError, BreachResult, BreachSlot};
pub use crate::generators::{generate, generate_passphrase, PasswordGenerator};
pub use crate::models::{EntropyReport, GenerationConfig, PassphraseConfig, StrengthLevel};
