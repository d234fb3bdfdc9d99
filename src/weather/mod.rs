mod client;
mod types;

pub use client::*;
pub use types::{CurrentBlock, CurrentConditions, Forecast};
