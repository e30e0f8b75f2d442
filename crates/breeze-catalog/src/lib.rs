//! # breeze-catalog: Catalog Provider
//!
//! In-memory catalog row store for the Breeze storefront.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   shopfront commands ──► CatalogStore (this crate)                      │
//! │                               │                                         │
//! │                               └── impl breeze_core::CatalogLookup       │
//! │                                        ▲                                │
//! │                                        │ price resolution at read time  │
//! │                               breeze_core::Cart                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart core treats the catalog as an external collaborator behind the
//! [`breeze_core::types::CatalogLookup`] seam; this crate is the reference
//! provider. Swapping in a database- or API-backed provider touches
//! nothing in the core.
//!
//! ## Modules
//! - [`store`] - `CatalogStore` with validated CRUD and filtering
//! - [`seed`] - realistic AC fixtures for development and tests
//! - [`error`] - `StoreError`

pub mod error;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{CatalogStore, ItemFilter};
