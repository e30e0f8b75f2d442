//! # Catalog Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (breeze-core)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds row-level context                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in shopfront) ← Serialized for the frontend                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use breeze_core::ValidationError;
use thiserror::Error;

/// Catalog row operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Item not found in the catalog.
    ///
    /// ## When This Occurs
    /// - Id doesn't exist
    /// - Update/deactivate targeting a removed row
    #[error("Item not found: {id}")]
    NotFound { id: String },

    /// An insert collided with an existing id.
    #[error("Item '{id}' already exists")]
    DuplicateId { id: String },

    /// The item failed field validation (wraps breeze-core's error).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
