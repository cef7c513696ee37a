//! In-process storage adapters.
//!
//! The portal keeps everything in memory for the lifetime of the process;
//! a real datastore would implement the same `Repository`/`Document` ports.

pub mod memory_repo;
