//! # State Module
//!
//! Session state for the shopfront command layer.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own state type:
//!
//! 1. **Clearer command signatures**: commands declare exactly what they need
//! 2. **Easier testing**: each state can be constructed independently
//! 3. **Reduced contention**: the catalog and the cart lock independently
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                                │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogStore │  │  CartState   │  │   StoreConfig    │              │
//! │  │ (breeze-     │  │              │  │                  │              │
//! │  │  catalog,    │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │  RwLock      │  │    Cart      │  │  whatsapp_number │              │
//! │  │  inside)     │  │  >>          │  │  (read-only)     │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::CartState;
pub use config::StoreConfig;
