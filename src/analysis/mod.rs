// src/analysis/mod.rs

pub mod entropy;
pub mod patterns;
pub mod suggestions;

pub use entropy::{analyze, crack_time, pool_entropy, shannon_entropy};
pub use patterns::{detect_patterns, Pattern};
pub use suggestions::suggest;
