use crate::config::Config;
use axis_form::{AssetDir, BackgroundSource};
use std::sync::Arc;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Page backgrounds for the disposal form
    pub assets: Arc<dyn BackgroundSource + Send + Sync>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assets = AssetDir::new(config.assets.dir.clone());
        Self::with_assets(config, Arc::new(assets))
    }

    pub fn with_assets(config: Config, assets: Arc<dyn BackgroundSource + Send + Sync>) -> Self {
        Self {
            assets,
            config: Arc::new(config),
        }
    }
}
