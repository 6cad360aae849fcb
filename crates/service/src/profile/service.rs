use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateProfileInput, ListParams, ProfileDetail, ProfileSummary};
use super::repository::ProfileRepository;
use super::validation::{check_fields, COMPANY_MISSING, INVALID_INTEGER};
use crate::errors::ServiceError;
use crate::ordering::ProfileOrdering;
use crate::pagination::{Page, PageRequest};

/// Profile business service independent of web framework
pub struct ProfileService<R: ProfileRepository> {
    repo: Arc<R>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// One page of profile summaries.
    ///
    /// The ordering token is checked before anything else, so an unknown
    /// token never reaches the store.
    #[instrument(skip(self, params), fields(ordering = ?params.ordering, page = ?params.page))]
    pub async fn list(&self, params: &ListParams) -> Result<Page<ProfileSummary>, ServiceError> {
        let ordering = ProfileOrdering::from_query(params.ordering.as_deref())?;
        let req = PageRequest::from_query(params.page.as_deref(), params.page_size.as_deref())?;
        let page = self.repo.list(ordering, req).await?;
        info!(event = "profile_list", count = page.count, returned = page.results.len(), "listed profiles");
        Ok(page)
    }

    /// Full projection of one profile, looked up by the raw `id` value.
    #[instrument(skip(self))]
    pub async fn detail(&self, id: Option<&str>) -> Result<ProfileDetail, ServiceError> {
        let id = id
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .ok_or_else(|| ServiceError::invalid("id", INVALID_INTEGER))?;
        match self.repo.get(id).await? {
            Some(d) => Ok(d),
            None => {
                info!(event = "profile_not_found", id, "profile lookup missed");
                Err(ServiceError::not_found("profile"))
            }
        }
    }

    /// Validate, check the company reference, then store the profile and its
    /// labels in one transaction.
    ///
    /// # Examples
    /// ```
    /// use service::profile::{ProfileService, repository::mock::MockProfileRepository};
    /// use service::profile::domain::CreateProfileInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockProfileRepository::default().with_company(1, "Acme"));
    /// let svc = ProfileService::new(repo);
    /// let input = CreateProfileInput {
    ///     img_url: Some("http://example.com/a.jpg".into()),
    ///     name: Some("Kim".into()),
    ///     email: Some("kim@example.com".into()),
    ///     tel: Some("010-0000-0000".into()),
    ///     rank: Some("Manager".into()),
    ///     company_id: Some(serde_json::json!(1)),
    ///     labels: Some(serde_json::json!(["vip"])),
    ///     ..Default::default()
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.company_name.as_deref(), Some("Acme"));
    /// assert_eq!(created.labels, vec!["vip"]);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProfileInput) -> Result<ProfileDetail, ServiceError> {
        let mut checked = check_fields(input);
        if let Some(company_id) = checked.profile.company_id {
            if !self.repo.company_exists(company_id).await? {
                checked.errors.add("company_id", COMPANY_MISSING);
            }
        }
        if !checked.errors.is_empty() {
            info!(event = "profile_rejected", fields = %checked.errors, "profile input rejected");
            return Err(ServiceError::InvalidArgument(checked.errors));
        }

        let detail = self.repo.create(checked.profile, &checked.labels).await?;
        info!(event = "profile_created", id = detail.id, labels = detail.labels.len(), "profile created");
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::repo::seaorm::SeaOrmProfileRepository;
    use crate::profile::repository::mock::MockProfileRepository;
    use crate::test_support::seeded_db;
    use serde_json::json;

    fn payload(company_id: serde_json::Value) -> CreateProfileInput {
        serde_json::from_value(json!({
            "img_url": "http://example.com/img.jpg",
            "name": "테스트",
            "email": "test@example.com",
            "tel": "010-1234-5678",
            "rank": "매니저",
            "address": "테스트 데이터",
            "birthday": "1990-01-01",
            "web_site": "http://www.example.com",
            "memo": "Test memo",
            "company_id": company_id,
            "labels": ["Label 1", "Label 2"]
        }))
        .unwrap()
    }

    fn params(ordering: Option<&str>, page: Option<&str>, page_size: Option<&str>) -> ListParams {
        ListParams {
            ordering: ordering.map(str::to_string),
            page: page.map(str::to_string),
            page_size: page_size.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_then_detail_shows_labels_in_order() -> anyhow::Result<()> {
        let t = seeded_db().await?;
        let svc = ProfileService::new(Arc::new(SeaOrmProfileRepository { db: t.db.clone() }));
        let created = svc.create(payload(json!(t.company_ids[0]))).await?;
        assert_eq!(created.name, "테스트");
        assert_eq!(created.memo.as_deref(), Some("Test memo"));
        assert_eq!(created.rank, "매니저");

        let fetched = svc.detail(Some(&created.id.to_string())).await?;
        assert_eq!(fetched.labels, vec!["Label 1", "Label 2"]);
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn missing_company_rejected_without_writes() -> anyhow::Result<()> {
        let repo = Arc::new(MockProfileRepository::default().with_company(1, "Acme"));
        let svc = ProfileService::new(repo.clone());
        let err = svc.create(payload(json!(999))).await.unwrap_err();
        match err {
            ServiceError::InvalidArgument(fields) => {
                assert_eq!(fields.get("company_id").unwrap()[0], COMPANY_MISSING);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(repo.profile_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn field_and_company_errors_are_merged() -> anyhow::Result<()> {
        let svc = ProfileService::new(Arc::new(MockProfileRepository::default()));
        let mut input = payload(json!(42));
        input.birthday = Some("1899-01-01".into());
        let Err(ServiceError::InvalidArgument(fields)) = svc.create(input).await else {
            panic!("expected invalid argument");
        };
        assert_eq!(fields.fields().collect::<Vec<_>>(), vec!["birthday", "company_id"]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_ordering_fails_before_store() -> anyhow::Result<()> {
        let svc = ProfileService::new(Arc::new(MockProfileRepository::default()));
        let err = svc.list(&params(Some("name; DROP TABLE profiles"), None, None)).await.unwrap_err();
        let ServiceError::InvalidArgument(fields) = err else { panic!("expected invalid argument") };
        assert!(fields.get("ordering").is_some());
        Ok(())
    }

    #[tokio::test]
    async fn invalid_page_is_not_found() -> anyhow::Result<()> {
        let svc = ProfileService::new(Arc::new(MockProfileRepository::default()));
        for bad in ["0", "-1", "abc"] {
            let err = svc.list(&params(None, Some(bad), None)).await.unwrap_err();
            assert!(matches!(err, ServiceError::NotFound(_)), "{bad}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn list_against_store() -> anyhow::Result<()> {
        let t = seeded_db().await?;
        let svc = ProfileService::new(Arc::new(SeaOrmProfileRepository { db: t.db.clone() }));
        let page = svc.list(&params(Some("-name"), None, Some("2"))).await?;
        assert_eq!(page.count, 5);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "테스트입니다.");
        assert_eq!(page.next_page(), Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn detail_id_handling() -> anyhow::Result<()> {
        let svc = ProfileService::new(Arc::new(MockProfileRepository::default()));
        for raw in [None, Some(""), Some("abc"), Some("1.5")] {
            let err = svc.detail(raw).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidArgument(_)), "{raw:?}");
        }
        assert!(matches!(svc.detail(Some("7")).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn mock_orders_like_store() -> anyhow::Result<()> {
        let repo = Arc::new(MockProfileRepository::default().with_company(1, "Acme"));
        let svc = ProfileService::new(repo);
        for (name, tel) in [("b", "2"), ("a", "3"), ("c", "1")] {
            let mut input = payload(json!(1));
            input.name = Some(name.into());
            input.tel = Some(tel.into());
            svc.create(input).await?;
        }
        let page = svc.list(&params(Some("tel"), None, None)).await?;
        let names: Vec<_> = page.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
        Ok(())
    }
}
