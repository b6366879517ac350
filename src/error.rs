//! Unified error type for the nanoword library.
//!
//! This module provides a single [`Error`] type that encompasses all errors
//! that can occur in the library, making it easier to handle errors in
//! application code.

use thiserror::Error;

use crate::kv::KvError;
use crate::puzzle::PuzzleError;
use crate::share::ShareError;

/// Unified error type for all nanoword operations.
///
/// This enum wraps all module-specific error types, allowing callers to
/// use a single error type throughout their application.
///
/// # Example
///
/// ```ignore
/// use nanoword::{Result, ShareService};
///
/// async fn load(shares: &ShareService) -> Result<()> {
///     let data = shares.get("2024-01-01", "abc").await?;
///     println!("{data:?}");
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from key-value store operations.
    #[error(transparent)]
    Kv(#[from] KvError),

    /// Classified failure from the share lookup or write path.
    #[error(transparent)]
    Share(#[from] ShareError),

    /// Classified failure from the puzzle delivery path.
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a KV store error.
    pub fn is_kv(&self) -> bool {
        matches!(self, Self::Kv(_))
    }

    /// Returns `true` if this is a share lookup/write failure.
    pub fn is_share(&self) -> bool {
        matches!(self, Self::Share(_))
    }

    /// Returns `true` if this is a puzzle delivery failure.
    pub fn is_puzzle(&self) -> bool {
        matches!(self, Self::Puzzle(_))
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
