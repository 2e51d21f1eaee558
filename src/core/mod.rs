//! Core types and error handling for clustermap
//!
//! This module provides the foundation used by the rest of the crate:
//!
//! - **Strongly-typed errors** ([`ClustermapError`]) for precise handling in
//!   code, covering geometry, input parsing, and file access failures.
//! - **User-friendly contexts** ([`ErrorContext`]) that wrap an error with an
//!   actionable suggestion and optional details for CLI display.
//! - [`user_friendly_error`] to convert any [`anyhow::Error`] bubbling out of
//!   a command into a displayable context.
//!
//! Library code returns [`anyhow::Result`] at module seams and the typed
//! [`ClustermapError`] where callers can reasonably branch on the failure.
//! The CLI entry point converts whatever reaches it into an [`ErrorContext`]
//! and exits non-zero; nothing in the crate retries or recovers on its own.

pub mod error;

pub use error::{ClustermapError, ErrorContext, user_friendly_error};
