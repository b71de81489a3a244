//! sg-core: stable foundation for stopgraph.
//!
//! Contains:
//! - numeric (Real + Point2 + tolerance helpers)
//! - ids (compact node IDs for layout/graph objects)
//! - category (name-prefix classification of nodes)
//! - error (shared error types)

pub mod category;
pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use category::Category;
pub use error::{SgError, SgResult};
pub use ids::*;
pub use numeric::*;
