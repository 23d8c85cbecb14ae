//! The direction-optimizing BFS traversal: solution state, frontier, the
//! two parallel steps, and the hybrid driver that switches between them.

pub mod frontier;
pub mod hybrid;
pub mod solution;
pub mod step;

pub use hybrid::{run, Method, Stats};
pub use solution::{Solution, NOT_VISITED};
