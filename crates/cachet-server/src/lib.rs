//! # Cachet Server Library
//!
//! Bootstrap and HTTP surface for the Cachet cache-aside layer.
//!
//! The bootstrap connects to the store once, fails fast if the liveness
//! probe does not pass, and hands the resulting client to the router.

pub mod app;
pub mod responses;
pub mod router;
pub mod startup;
pub mod state;

pub use app::*;
pub use router::*;
pub use state::*;
