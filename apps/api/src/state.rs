use crate::config::Config;
use crate::layout::PaginationConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry used when an export request carries none.
    pub page_config: PaginationConfig,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let page_config = PaginationConfig {
            product_label: config.product_label.clone(),
            ..PaginationConfig::default()
        };
        Self {
            config,
            page_config,
        }
    }
}
