//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod config;
pub mod events;
pub mod ledger;
pub mod moves;
pub mod rng;
pub mod rules;
pub mod session;

pub use config::*;
pub use events::*;
pub use ledger::*;
pub use moves::*;
pub use rng::*;
pub use rules::*;
pub use session::*;
