//! # Breeze Shopfront
//!
//! Command layer of the Breeze AC storefront: wires the pure cart engine
//! and the catalog store to a host (desktop shell, web server, CLI) and
//! delivers finished orders over WhatsApp.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        breeze-shopfront                                 │
//! │                                                                         │
//! │   Host (UI / server)                                                    │
//! │        │  invoke                                                        │
//! │        ▼                                                                │
//! │   commands/  ── item browsing, cart session, checkout                   │
//! │        │                                                                │
//! │   ┌────┴─────────┬───────────────────┬──────────────────┐              │
//! │   ▼              ▼                   ▼                  ▼              │
//! │  state/       breeze-catalog     breeze-core          sink/            │
//! │  CartState    CatalogStore       Cart, Money,         OrderSink        │
//! │  StoreConfig  (RwLock'd)         checkout             (WhatsApp)       │
//! │                                                                         │
//! │   error.rs ── every command failure serialized as                       │
//! │               { code, message, details? }                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The commands are plain functions over explicit state so any host can
//! mount them; nothing here does I/O except the order sink.

pub mod commands;
pub mod error;
pub mod sink;
pub mod state;

pub use error::{ApiError, ErrorCode};
