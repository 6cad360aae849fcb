use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{company, errors, label, validation};

pub const IMG_URL_MAX_LEN: usize = 400;
pub const NAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;
pub const TEL_MAX_LEN: usize = 20;
pub const RANK_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 500;
pub const WEB_SITE_MAX_LEN: usize = 400;

pub const INVALID_BIRTHDAY: &str = "Invalid Birthday format";

/// A contact card. `company_id` becomes `NULL` when its company is deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub img_url: String,
    pub name: String,
    pub email: String,
    pub tel: String,
    pub rank: String,
    pub address: Option<String>,
    pub birthday: Option<Date>,
    pub web_site: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub memo: Option<String>,
    pub company_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
    Label,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
            Relation::Label => Entity::has_many(label::Entity).into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl Related<label::Entity> for Entity {
    fn to() -> RelationDef { Relation::Label.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_img_url(v: &str) -> Result<(), errors::ModelError> {
    validation::url(v, IMG_URL_MAX_LEN)
}

pub fn validate_name(v: &str) -> Result<(), errors::ModelError> {
    validation::text(v, NAME_MAX_LEN)
}

pub fn validate_email(v: &str) -> Result<(), errors::ModelError> {
    validation::email(v, EMAIL_MAX_LEN)
}

/// Free-form; no phone number format is imposed.
pub fn validate_tel(v: &str) -> Result<(), errors::ModelError> {
    validation::text(v, TEL_MAX_LEN)
}

pub fn validate_rank(v: &str) -> Result<(), errors::ModelError> {
    validation::text(v, RANK_MAX_LEN)
}

pub fn validate_address(v: &str) -> Result<(), errors::ModelError> {
    validation::text(v, ADDRESS_MAX_LEN)
}

pub fn validate_web_site(v: &str) -> Result<(), errors::ModelError> {
    validation::url(v, WEB_SITE_MAX_LEN)
}

pub fn validate_memo(v: &str) -> Result<(), errors::ModelError> {
    validation::not_blank(v)
}

/// `YYYY-MM-DD` between 1900 and 2099.
///
/// The pattern alone admits shapes such as `2023-02-30` or month `00`; those
/// cannot be stored in a `DATE` column and are rejected with the same message
/// when the calendar conversion fails.
pub fn validate_birthday(v: &str) -> Result<Date, errors::ModelError> {
    if !validation::BIRTHDAY_PATTERN.is_match(v) {
        return Err(errors::ModelError::Validation(INVALID_BIRTHDAY.into()));
    }
    NaiveDate::parse_from_str(v, "%Y-%m-%d")
        .map_err(|_| errors::ModelError::Validation(INVALID_BIRTHDAY.into()))
}

/// Field values that already passed validation.
#[derive(Clone, Debug, Default)]
pub struct NewProfile {
    pub img_url: String,
    pub name: String,
    pub email: String,
    pub tel: String,
    pub rank: String,
    pub address: Option<String>,
    pub birthday: Option<Date>,
    pub web_site: Option<String>,
    pub memo: Option<String>,
    pub company_id: Option<i32>,
}

/// Insert one profile row. Labels are attached separately.
pub async fn insert<C: ConnectionTrait>(db: &C, p: NewProfile) -> Result<Model, errors::ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        img_url: Set(p.img_url),
        name: Set(p.name),
        email: Set(p.email),
        tel: Set(p.tel),
        rank: Set(p.rank),
        address: Set(p.address),
        birthday: Set(p.birthday),
        web_site: Set(p.web_site),
        memo: Set(p.memo),
        company_id: Set(p.company_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
