//! # Configuration State
//!
//! Store configuration loaded at startup.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

/// Storefront configuration.
///
/// Most fields have sensible defaults for development; production
/// deployments set the real shop number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (displayed in order messages).
    pub store_name: String,

    /// WhatsApp number orders are sent to, international format without
    /// `+` or leading zeros (the `wa.me` convention), e.g. `923001234567`.
    pub whatsapp_number: String,

    /// City the shop operates in, quoted in confirmations.
    pub city: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Breeze Air Conditioning".to_string(),
            whatsapp_number: "923001234567".to_string(),
            city: "Islamabad".to_string(),
        }
    }
}
