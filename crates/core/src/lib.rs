pub mod collection;
pub mod config;
pub mod error;
pub mod logging;
pub mod snapshot;

pub use collection::{AssetCollection, AssetNode, LocationNode};
pub use error::{HangarError, Result};
pub use snapshot::Snapshot;
