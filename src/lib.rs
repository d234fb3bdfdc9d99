pub mod config;
pub mod error;
pub mod llm;
pub mod mandi;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod server;
pub mod weather;

pub use error::{Error, Result};
