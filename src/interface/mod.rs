//! # Interface Layer
//!
//! Handles interaction with the user through text commands.

pub mod commands;
