use async_trait::async_trait;

use models::profile::NewProfile;

use super::domain::{ProfileDetail, ProfileSummary};
use crate::errors::ServiceError;
use crate::ordering::ProfileOrdering;
use crate::pagination::{Page, PageRequest};

/// Repository abstraction for profile persistence.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn list(&self, ordering: Option<ProfileOrdering>, page: PageRequest) -> Result<Page<ProfileSummary>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<ProfileDetail>, ServiceError>;
    async fn company_exists(&self, company_id: i32) -> Result<bool, ServiceError>;
    /// Profile row and label rows commit together or not at all.
    async fn create(&self, profile: NewProfile, labels: &[String]) -> Result<ProfileDetail, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockProfileRepository {
        companies: Mutex<BTreeMap<i32, String>>,
        profiles: Mutex<BTreeMap<i32, ProfileDetail>>,
    }

    impl MockProfileRepository {
        pub fn with_company(self, id: i32, name: &str) -> Self {
            self.companies.lock().unwrap().insert(id, name.to_string());
            self
        }

        pub fn profile_count(&self) -> usize {
            self.profiles.lock().unwrap().len()
        }
    }

    fn sort_key(p: &ProfileSummary, o: ProfileOrdering) -> &str {
        match o {
            ProfileOrdering::NameAsc | ProfileOrdering::NameDesc => &p.name,
            ProfileOrdering::EmailAsc | ProfileOrdering::EmailDesc => &p.email,
            ProfileOrdering::TelAsc | ProfileOrdering::TelDesc => &p.tel,
        }
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn list(&self, ordering: Option<ProfileOrdering>, page: PageRequest) -> Result<Page<ProfileSummary>, ServiceError> {
            let mut rows: Vec<ProfileSummary> = self.profiles.lock().unwrap().values().map(ProfileDetail::summary).collect();
            if let Some(o) = ordering {
                let desc = matches!(o, ProfileOrdering::NameDesc | ProfileOrdering::EmailDesc | ProfileOrdering::TelDesc);
                rows.sort_by(|a, b| {
                    let key = sort_key(a, o).cmp(sort_key(b, o));
                    let key = if desc { key.reverse() } else { key };
                    key.then(a.id.cmp(&b.id))
                });
            }
            let count = rows.len() as u64;
            let results = rows
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.page_size as usize)
                .collect();
            Ok(Page { count, page: page.page, page_size: page.page_size, results })
        }

        async fn get(&self, id: i32) -> Result<Option<ProfileDetail>, ServiceError> {
            Ok(self.profiles.lock().unwrap().get(&id).cloned())
        }

        async fn company_exists(&self, company_id: i32) -> Result<bool, ServiceError> {
            Ok(self.companies.lock().unwrap().contains_key(&company_id))
        }

        async fn create(&self, p: NewProfile, labels: &[String]) -> Result<ProfileDetail, ServiceError> {
            let company_name = match p.company_id {
                Some(id) => Some(
                    self.companies
                        .lock()
                        .unwrap()
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| ServiceError::Db(format!("foreign key violation: company {id}")))?,
                ),
                None => None,
            };
            let mut profiles = self.profiles.lock().unwrap();
            let id = profiles.keys().next_back().map_or(1, |k| k + 1);
            let detail = ProfileDetail {
                id,
                img_url: p.img_url,
                name: p.name,
                email: p.email,
                tel: p.tel,
                rank: p.rank,
                company_id: p.company_id,
                company_name,
                labels: labels.to_vec(),
                memo: p.memo,
                address: p.address,
                birthday: p.birthday,
                web_site: p.web_site,
            };
            profiles.insert(id, detail.clone());
            Ok(detail)
        }
    }
}
