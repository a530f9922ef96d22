//! Viewer preferences
//!
//! Persisted in LocalStorage, separate from any page state.

use serde::{Deserialize, Serialize};

use crate::consts::PARTICLE_COUNT;

/// Background animation preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Override for the number of blobs (None = default field size)
    pub particle_count: Option<usize>,
    /// Minimize motion: disables the scroll parallax bias
    pub reduced_motion: bool,
}

impl Settings {
    /// Field size after applying the override
    pub fn effective_particle_count(&self) -> usize {
        self.particle_count.unwrap_or(PARTICLE_COUNT)
    }

    /// Apply overrides from a URL query string (`?blobs=8&reduced-motion=1`).
    ///
    /// Returns true if anything changed, so the caller knows to persist.
    pub fn apply_query(&mut self, query: &str) -> bool {
        let mut changed = false;
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "blobs" => {
                    if let Ok(n) = value.parse::<usize>() {
                        if n > 0 && self.particle_count != Some(n) {
                            self.particle_count = Some(n);
                            changed = true;
                        }
                    }
                }
                "reduced-motion" => {
                    let on = matches!(value, "" | "1" | "true");
                    if self.reduced_motion != on {
                        self.reduced_motion = on;
                        changed = true;
                    }
                }
                _ => {}
            }
        }
        changed
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "blobfield_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
