use std::sync::Arc;

use portfolio_core::admin::AdminGate;
use portfolio_core::media_store::MediaStore;
use portfolio_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portfolio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Uploaded image storage.
    pub media: Arc<MediaStore>,
    /// Admin password gate.
    pub admin: AdminGate,
    /// Contact-form relay; `None` when SMTP is not configured.
    pub contact: Option<ContactRelay>,
}

/// A mailer plus the address contact messages are delivered to.
#[derive(Clone)]
pub struct ContactRelay {
    pub mailer: Arc<dyn Mailer>,
    pub to: String,
}

impl AppState {
    /// Build state from the startup configuration.
    pub fn new(
        pool: portfolio_db::DbPool,
        config: ServerConfig,
        contact: Option<ContactRelay>,
    ) -> Self {
        let media = MediaStore::new(&config.upload_dir);
        let admin = AdminGate::new(config.admin_password.clone());
        Self {
            pool,
            config: Arc::new(config),
            media: Arc::new(media),
            admin,
            contact,
        }
    }
}
