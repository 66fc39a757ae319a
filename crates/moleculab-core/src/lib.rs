pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::*;
pub use error::*;
pub use rng::*;
pub use types::*;
