//! # Storage Layer
//!
//! The record list survives reloads by being mirrored into a session-scoped
//! key-value store. That store is reached only through the [`SessionStorage`]
//! trait, so the record logic never knows whether it talks to a directory on
//! disk or to a map in memory.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsSessionStorage`]: one directory per session, one JSON file
//!   per key, written atomically.
//! - [`mem_backend::MemSessionStorage`]: in-memory fake for tests, with write
//!   failure simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/sessions/<session>/
//! └── submittedData.json   # JSON array of records
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::SessionStorage;
