//! # Domain Layer
//!
//! Core definitions, types, and traits of the character wizard.
//! Independent of any host platform, serving as the contract for other layers.

pub mod catalog;
pub mod character;
pub mod config;
pub mod error;
pub mod paths;
pub mod preview;
pub mod traits;
pub mod types;
pub mod validation;
