use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, profile, validation};

pub const NAME_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Profile,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Profile => Entity::has_many(profile::Entity).into() }
    }
}

impl Related<profile::Entity> for Entity {
    fn to() -> RelationDef { Relation::Profile.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    validation::text(name, NAME_MAX_LEN)
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Rename a company, refreshing `updated_at`.
pub async fn rename<C: ConnectionTrait>(db: &C, id: i32, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| errors::ModelError::Validation("company not found".into()))?
        .into();
    found.name = Set(name.to_string());
    found.updated_at = Set(Utc::now().into());
    Ok(found.update(db).await?)
}

/// Whether a company row with this id exists.
pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}
