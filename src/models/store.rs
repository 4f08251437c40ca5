#[cfg(debug_assertions)]
use crate::config::DF;

use crate::models::asset::Asset;

/// In-memory holder for the current asset collection plus auxiliary status.
///
/// `loading` / `error` are exercised by the seed path today and are the
/// landing zone for a real feed integration later. All operations are
/// synchronous; nothing here touches disk.
#[derive(Debug, Default, Clone)]
pub struct AssetStore {
    assets: Vec<Asset>,
    loading: bool,
    error: Option<String>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the entire collection.
    pub fn set_assets(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
    }

    /// Replace the entry with a matching id wholly.
    ///
    /// Unknown ids leave the collection untouched (no insert): length and
    /// order are preserved in every case.
    pub fn update_asset(&mut self, asset: Asset) {
        match self.assets.iter().position(|a| a.id == asset.id) {
            Some(idx) => {
                #[cfg(debug_assertions)]
                if DF.log_store_updates {
                    log::info!("store: replacing {} at index {}", asset.id, idx);
                }
                self.assets[idx] = asset;
            }
            None => {
                #[cfg(debug_assertions)]
                if DF.log_store_updates {
                    log::info!("store: ignoring update for unknown id {}", asset.id);
                }
            }
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
