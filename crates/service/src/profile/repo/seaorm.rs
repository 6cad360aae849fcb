use sea_orm::DatabaseConnection;

use models::{company, profile::NewProfile};

use crate::db::{profile_create, profile_queries};
use crate::errors::ServiceError;
use crate::ordering::ProfileOrdering;
use crate::pagination::{Page, PageRequest};
use crate::profile::domain::{ProfileDetail, ProfileSummary};
use crate::profile::repository::ProfileRepository;

pub struct SeaOrmProfileRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ProfileRepository for SeaOrmProfileRepository {
    async fn list(&self, ordering: Option<ProfileOrdering>, page: PageRequest) -> Result<Page<ProfileSummary>, ServiceError> {
        profile_queries::list_profiles(&self.db, ordering, page).await
    }

    async fn get(&self, id: i32) -> Result<Option<ProfileDetail>, ServiceError> {
        profile_queries::get_profile_detail(&self.db, id).await
    }

    async fn company_exists(&self, company_id: i32) -> Result<bool, ServiceError> {
        Ok(company::exists(&self.db, company_id).await?)
    }

    async fn create(&self, profile: NewProfile, labels: &[String]) -> Result<ProfileDetail, ServiceError> {
        profile_create::create_profile(&self.db, profile, labels).await
    }
}
