//! Platform-appropriate configuration and profile source.
//!
//! - **Web** (WASM): always the built-in defaults.
//! - **Desktop** (native): `<config_dir>/profile-gallery/gallery.toml` if present,
//!   e.g. `~/.config/profile-gallery/gallery.toml` on Linux.
//!
//! A missing file is normal; an unreadable or invalid one is logged and ignored.

use profiles::{GalleryConfig, RandomUserClient};

/// Load the gallery configuration for this platform.
pub fn load_config() -> GalleryConfig {
    #[cfg(target_arch = "wasm32")]
    {
        GalleryConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .map(|dir| dir.join("profile-gallery").join(GalleryConfig::filename()));
        load_config_from(path.as_deref())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config_from(path: Option<&std::path::Path>) -> GalleryConfig {
    use profiles::ConfigError;

    let Some(path) = path else {
        return GalleryConfig::default();
    };

    match GalleryConfig::load(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            GalleryConfig::default()
        }
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            GalleryConfig::default()
        }
    }
}

/// Create the live profile source described by `config`.
pub fn make_source(config: &GalleryConfig) -> RandomUserClient {
    RandomUserClient::new(&config.api)
}
