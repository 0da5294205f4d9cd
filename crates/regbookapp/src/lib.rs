//! # Regbook Architecture
//!
//! Regbook collects registration records through a form, validates them, and
//! keeps the accepted ones in an ordered list mirrored into session storage.
//! It is a **UI-agnostic library**: the terminal client in the `regbook` crate
//! is one presentation, and any other front end drives the same types.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (external, e.g. the `regbook` binary)         │
//! │  - Forwards field changes, submit, edit, delete             │
//! │  - Renders from a FormSnapshot                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Form Controller (form.rs)                                  │
//! │  - Creating / Editing(index) state machine                  │
//! │  - Holds the draft and the current field errors             │
//! └─────────────────────────────────────────────────────────────┘
//!              │                               │
//!              ▼                               ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────┐
//! │  Validator (validation.rs)│   │  Record Store (records.rs)  │
//! │  - Pure, all rules at once│   │  - Ordered list, persists   │
//! └───────────────────────────┘   │    in full on every change  │
//!                                 └─────────────────────────────┘
//!                                              │
//!                                              ▼
//!                                 ┌─────────────────────────────┐
//!                                 │  Storage (store/)           │
//!                                 │  - SessionStorage trait     │
//!                                 │  - Fs (prod), Mem (tests)   │
//!                                 └─────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process.
//! Operations return `Result`; validation problems are plain data in
//! [`validation::FieldErrors`], while [`error::RegbookError`] is reserved for
//! contract violations (bad indices) and storage failures.
//!
//! ## Module Overview
//!
//! - [`form`]: Form controller and snapshots
//! - [`records`]: Record store and persistence protocol
//! - [`validation`]: Field rules
//! - [`store`]: Session storage abstraction and implementations
//! - [`model`]: `Field`, `Record`, `Draft`
//! - [`config`]: Configuration loading
//! - [`session`]: Session name rules
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod records;
pub mod session;
pub mod store;
pub mod validation;
