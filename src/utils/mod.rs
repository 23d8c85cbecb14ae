//! Small helpers that don't belong to any single component: timing and the
//! MTEPS throughput metric reported on stdout.

pub mod timer;
