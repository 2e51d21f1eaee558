//! Error handling for clustermap
//!
//! The error system has two layers:
//!
//! 1. [`ClustermapError`] - enumerated error types for all failure cases in
//!    the crate, used where code needs to branch on a specific failure.
//! 2. [`ErrorContext`] - a wrapper that adds a user-facing suggestion and
//!    optional details, displayed with terminal colors by the CLI.
//!
//! Common standard library and serde errors convert automatically:
//! [`std::io::Error`] becomes [`ClustermapError::Io`] and
//! [`serde_json::Error`] becomes [`ClustermapError::Json`].
//!
//! # Examples
//!
//! ```rust
//! use clustermap::core::{ClustermapError, ErrorContext};
//!
//! let error = ClustermapError::InvalidScale { scale: 0.0 };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Map scales are 1/n denominators, e.g. 19200");
//!
//! let message = format!("{context}");
//! assert!(message.contains("Suggestion"));
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for clustermap operations.
///
/// Each variant carries enough context (paths, offending values) for the
/// message alone to identify the failure. Messages are written for end users
/// of the CLI, not only for developers.
#[derive(Error, Debug)]
pub enum ClustermapError {
    /// A map scale was zero or negative.
    ///
    /// Scales are the `n` in a `1/n` representative-fraction, so they must be
    /// strictly positive. Raised by resolution math and per-scale clustering.
    #[error("invalid map scale: {scale} (scales must be positive)")]
    InvalidScale {
        /// The offending scale value
        scale: f64,
    },

    /// A clustering radius was not a finite, non-negative number.
    #[error("invalid cluster radius: {radius} (radius must be finite and non-negative)")]
    InvalidRadius {
        /// The offending radius value
        radius: f64,
    },

    /// An input file could not be read or did not contain what was expected.
    #[error("failed to read input file {path}: {reason}")]
    InputFile {
        /// Path to the file as given on the command line
        path: String,
        /// Why the file was rejected
        reason: String,
    },

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper for unexpected failures.
    #[error("{message}")]
    Other {
        /// Description of the failure
        message: String,
    },
}

/// User-friendly error wrapper with suggestions and details.
///
/// Wraps a [`ClustermapError`] with an optional actionable suggestion
/// (displayed in green) and optional extra details (displayed in yellow).
/// The CLI calls [`display`](Self::display) on the context produced by
/// [`user_friendly_error`] before exiting non-zero.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying clustermap error
    pub error: ClustermapError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ClustermapError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Known error types get a tailored suggestion; everything else is wrapped
/// verbatim so the original message still reaches the user.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<ClustermapError>() {
        Ok(typed) => return contextualize(typed),
        Err(other) => other,
    };

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ClustermapError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ClustermapError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check file ownership and permissions");
            }
            _ => {}
        }
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(ClustermapError::Other {
            message: json_error.to_string(),
        })
        .with_suggestion("Check the JSON syntax of the input file")
        .with_details(
            "News-item files are a JSON array of objects with \"id\", \"schema\", \
             and an optional \"location\" [lng, lat] pair",
        );
    }

    ErrorContext::new(ClustermapError::Other {
        message: format!("{error:#}"),
    })
}

/// Attach suggestions to typed errors where there is a useful one to give.
fn contextualize(error: ClustermapError) -> ErrorContext {
    match &error {
        ClustermapError::InvalidScale { .. } => ErrorContext::new(error).with_suggestion(
            "Map scales are the n in a 1/n fraction, e.g. 614400 down to 1200",
        ),
        ClustermapError::InvalidRadius { .. } => ErrorContext::new(error)
            .with_suggestion("Pass a pixel radius such as 20 via --radius"),
        ClustermapError::InputFile { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the file exists and contains a JSON array of news items"),
        ClustermapError::Json(_) => ErrorContext::new(error)
            .with_suggestion("Check the JSON syntax of the input file"),
        _ => ErrorContext::new(error),
    }
}
