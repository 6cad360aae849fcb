use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;
use models::profile::{self, NewProfile};

use crate::errors::ServiceError;
use crate::profile::domain::ProfileDetail;

use super::{labels::attach_labels, profile_queries::get_profile_detail};

/// Insert a profile and its labels atomically and return the stored detail.
///
/// Callers validate fields and the company reference first; a failure here
/// is a store failure and leaves nothing behind.
pub async fn create_profile(db: &DatabaseConnection, new: NewProfile, labels: &[String]) -> Result<ProfileDetail, ServiceError> {
    let txn = db.begin().await?;
    let row = profile::insert(&txn, new).await?;
    let attached = attach_labels(&txn, row.id, labels).await?;
    debug!(profile_id = row.id, labels = attached, "profile rows staged");
    let detail = get_profile_detail(&txn, row.id)
        .await?
        .ok_or_else(|| ServiceError::Db(format!("profile {} vanished inside its transaction", row.id)))?;
    txn.commit().await?;
    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_db;
    use sea_orm::{EntityTrait, PaginatorTrait};

    fn sample(company_id: i32) -> NewProfile {
        NewProfile {
            img_url: "http://example.com/img.jpg".into(),
            name: "테스트".into(),
            email: "test@example.com".into(),
            tel: "010-1234-5678".into(),
            rank: "매니저".into(),
            company_id: Some(company_id),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn creates_profile_with_labels() -> anyhow::Result<()> {
        let t = seeded_db().await?;
        let labels = vec!["Label 1".to_string(), "Label 2".to_string()];
        let d = create_profile(&t.db, sample(t.company_ids[0]), &labels).await?;
        assert_eq!(d.labels, labels);
        assert_eq!(d.company_name.as_deref(), Some("Company 1"));
        assert_eq!(profile::Entity::find().count(&t.db).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn failed_insert_leaves_no_rows() -> anyhow::Result<()> {
        let t = seeded_db().await?;
        let before_profiles = profile::Entity::find().count(&t.db).await?;
        let before_labels = models::label::Entity::find().count(&t.db).await?;
        // foreign key violation on the profile row
        let err = create_profile(&t.db, sample(9999), &["x".to_string()]).await.unwrap_err();
        assert!(err.is_internal());
        assert_eq!(profile::Entity::find().count(&t.db).await?, before_profiles);
        assert_eq!(models::label::Entity::find().count(&t.db).await?, before_labels);
        Ok(())
    }
}
