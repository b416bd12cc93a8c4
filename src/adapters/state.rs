use std::{sync::Arc, time::Duration};

use crate::application::{repositories::file_repository::FileRepository, services::StorageService};

#[derive(Clone)]
pub struct AppState {
    pub storage_service: Arc<dyn StorageService>,
    pub file_repository: Arc<dyn FileRepository>,
    pub download_url_ttl: Duration,
}
