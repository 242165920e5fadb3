//! Dynamic row model

mod fallback;
mod resource;
mod row;
mod row_serde;
pub mod shape;
mod source;
mod value;

pub use fallback::*;
pub use resource::*;
pub use row::*;
pub use source::*;
pub use value::*;
