//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., CharacterGateway, HostPlatform).

pub mod console;
pub mod gateway;
