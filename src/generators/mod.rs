// src/generators/mod.rs

pub mod charset;
pub mod passphrase;
pub mod password;

pub use charset::CharacterClass;
pub use passphrase::{generate_passphrase, passphrase_entropy_bits};
pub use password::{generate, GeneratorError, PasswordGenerator};
