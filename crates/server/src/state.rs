use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::profile::{repo::seaorm::SeaOrmProfileRepository, ProfileService};

#[derive(Clone)]
pub struct ServerState {
    pub profiles: Arc<ProfileService<SeaOrmProfileRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmProfileRepository { db };
        Self { profiles: Arc::new(ProfileService::new(Arc::new(repo))) }
    }
}
