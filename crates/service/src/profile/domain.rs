use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row of the listing: the profile, its company and its label names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: i32,
    pub img_url: String,
    pub name: String,
    pub email: String,
    pub tel: String,
    pub rank: String,
    pub company_id: Option<i32>,
    pub company_name: Option<String>,
    pub labels: Vec<String>,
}

/// Full projection of one profile; optional fields serialise as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDetail {
    pub id: i32,
    pub img_url: String,
    pub name: String,
    pub email: String,
    pub tel: String,
    pub rank: String,
    pub company_id: Option<i32>,
    pub company_name: Option<String>,
    pub labels: Vec<String>,
    pub memo: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub web_site: Option<String>,
}

impl ProfileDetail {
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: self.id,
            img_url: self.img_url.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            tel: self.tel.clone(),
            rank: self.rank.clone(),
            company_id: self.company_id,
            company_name: self.company_name.clone(),
            labels: self.labels.clone(),
        }
    }
}

/// Creation payload exactly as received. Every field stays a raw JSON value
/// so that a missing or wrongly typed field is reported under its own name
/// instead of failing the whole body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProfileInput {
    #[serde(default)]
    pub img_url: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub tel: Option<Value>,
    #[serde(default)]
    pub rank: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub birthday: Option<Value>,
    #[serde(default)]
    pub web_site: Option<Value>,
    #[serde(default)]
    pub memo: Option<Value>,
    /// Integer, or a string holding one.
    #[serde(default)]
    pub company_id: Option<Value>,
    /// List of strings.
    #[serde(default)]
    pub labels: Option<Value>,
}

/// Raw query values of the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}
