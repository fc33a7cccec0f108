pub mod cs;
pub mod error;

pub use cs::{graph, heap};
pub use error::{GraphError, Result};
