// src/core/mod.rs

pub mod config;
