//! The two parallel BFS steps. See [`crate::algo::hybrid`] for the policy
//! that chooses between them.

pub mod bottom_up;
pub mod top_down;
