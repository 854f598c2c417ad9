//! Shared application state

use std::path::PathBuf;
use std::sync::Arc;

use jobboard_core::services::Services;
use jobboard_core::Repositories;
use jobboard_security::JwtService;
use jobboard_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub repos: Repositories,
    pub jwt: Arc<JwtService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, repos: Repositories) -> Self {
        let jwt = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.expiry_seconds));
        Self {
            services: Services::new(repos.clone(), jwt.clone()),
            repos,
            jwt,
            config: Arc::new(config),
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.upload.dir)
    }
}
