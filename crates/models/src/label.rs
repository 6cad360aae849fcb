use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, profile, validation};

pub const NAME_MAX_LEN: usize = 50;

/// A free-text tag owned by one profile.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "labels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub profile_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Profile,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Profile => Entity::belongs_to(profile::Entity)
                .from(Column::ProfileId)
                .to(profile::Column::Id)
                .into(),
        }
    }
}

impl Related<profile::Entity> for Entity {
    fn to() -> RelationDef { Relation::Profile.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    validation::text(name, NAME_MAX_LEN)
}

/// Build unsaved rows for `names`, all bound to `profile_id`.
pub fn new_rows(profile_id: i32, names: &[String]) -> Vec<ActiveModel> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    names
        .iter()
        .map(|name| ActiveModel {
            id: NotSet,
            name: Set(name.clone()),
            profile_id: Set(profile_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect()
}

/// Label rows of one profile in insertion order.
pub async fn for_profile<C: ConnectionTrait>(db: &C, profile_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::ProfileId.eq(profile_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
