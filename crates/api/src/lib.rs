pub mod error;
pub mod lookup;
pub mod models;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use lookup::{AssetLookup, UNKNOWN_LOCATION_LABEL};
pub use models::*;
