//! View-facing adapters.
//!
//! # Responsibility
//! - Translate view gestures and coordinates into repository calls.
//! - Expose display data keyed by `(section, row)`.
//!
//! # Invariants
//! - The view never addresses tasks by list position directly.

pub mod home;
pub mod list_presenter;
