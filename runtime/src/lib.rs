//! Executes the side effects a [`modhunt_core::GameSession`] asks for.
//!
//! The session stays synchronous and pure. [`GameDriver`] runs its commands, then hands each
//! returned [`modhunt_core::Effect`] to the collaborator ports on spawned tasks, so audio,
//! wallet transactions and minting never hold up gameplay. Their results come back as
//! [`Notice`]s and never touch game state.

pub use audio::*;
pub use chain::*;
pub use driver::*;
pub use error::*;
pub use notice::*;

mod audio;
mod chain;
mod driver;
mod error;
mod notice;
