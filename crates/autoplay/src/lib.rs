//! Seeded headless autoplay over the core session API.

mod config;
mod error;
mod simulator;
mod trace;

pub use config::*;
pub use error::*;
pub use simulator::*;
pub use trace::*;
