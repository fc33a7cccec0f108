pub mod indexed;

pub use indexed::IndexedMinHeap;
