pub mod graph;
pub mod heap;

// Re-export all modules
pub use graph::*;
pub use heap::*;
