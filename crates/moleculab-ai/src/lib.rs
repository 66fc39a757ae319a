pub mod explain;
pub mod fallback;
pub mod generator;
pub mod identify;
pub mod interactions;
pub mod provider;
pub mod synthesis;
pub mod toxicity;

pub use explain::*;
pub use fallback::*;
pub use generator::*;
pub use identify::*;
pub use interactions::*;
pub use provider::*;
pub use synthesis::*;
pub use toxicity::*;
