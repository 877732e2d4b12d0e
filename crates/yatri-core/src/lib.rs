//! # yatri-core
//!
//! Core types, traits, configuration, and error handling for the Yatri
//! tourism assistant.

pub mod config;
pub mod error;
pub mod language;
pub mod message;
pub mod traits;
pub mod weather;
