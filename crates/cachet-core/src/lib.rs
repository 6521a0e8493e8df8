//! # Cachet Core
//!
//! Core types shared by every Cachet crate: the unified error taxonomy,
//! the result alias, and logging initialisation.

pub mod error;
pub mod result;
pub mod telemetry;

pub use error::*;
pub use result::*;
pub use telemetry::*;
