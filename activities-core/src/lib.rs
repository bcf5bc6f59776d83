pub mod errors;
pub mod models;
pub mod registry;

pub use errors::*;
pub use models::*;
pub use registry::*;
