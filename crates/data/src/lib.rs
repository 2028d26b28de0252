//! Loading and validation of slot game configuration documents.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
