//! # Application Layer
//!
//! Contains the core logic and orchestration of the wizard.
//! This includes the session state, the wizard controller and command routing.

pub mod router;
pub mod state;
pub mod wizard;
