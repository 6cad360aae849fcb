use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use models::label;

use crate::errors::ServiceError;

/// Bulk-insert labels for a profile, preserving the given order.
pub async fn attach_labels<C: ConnectionTrait>(db: &C, profile_id: i32, names: &[String]) -> Result<usize, ServiceError> {
    if names.is_empty() {
        return Ok(0);
    }
    label::Entity::insert_many(label::new_rows(profile_id, names))
        .exec_without_returning(db)
        .await?;
    Ok(names.len())
}

/// Label names of several profiles, one query, in insertion order.
pub async fn names_by_profile<C: ConnectionTrait>(db: &C, profile_ids: &[i32]) -> Result<HashMap<i32, Vec<String>>, ServiceError> {
    let mut out: HashMap<i32, Vec<String>> = HashMap::new();
    if profile_ids.is_empty() {
        return Ok(out);
    }
    let rows = label::Entity::find()
        .filter(label::Column::ProfileId.is_in(profile_ids.iter().copied()))
        .order_by_asc(label::Column::Id)
        .all(db)
        .await?;
    for row in rows {
        out.entry(row.profile_id).or_default().push(row.name);
    }
    Ok(out)
}
