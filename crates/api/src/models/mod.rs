pub mod asset;
pub mod flag;
pub mod location;

pub use asset::*;
pub use flag::*;
pub use location::*;
