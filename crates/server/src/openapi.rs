use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ProfileSummaryDoc {
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

#[derive(ToSchema)]
pub struct ProfileDetailDoc {
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
    pub birthday: Option<chrono::NaiveDate>,
    pub web_site: Option<String>,
}

#[derive(ToSchema)]
pub struct PaginatedProfilesDoc {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<ProfileSummaryDoc>,
}

#[derive(ToSchema)]
pub struct CreateProfileRequest {
    pub img_url: String,
    pub name: String,
    pub email: String,
    pub tel: String,
    pub rank: String,
    pub address: Option<String>,
    /// `YYYY-MM-DD`, 1900 to 2099
    pub birthday: Option<String>,
    pub web_site: Option<String>,
    pub memo: Option<String>,
    pub company_id: i32,
    pub labels: Option<Vec<String>>,
}

/// Field name to list of messages.
#[derive(ToSchema)]
pub struct FieldErrorsDoc {
    #[schema(example = json!(["Company does not exist"]))]
    pub company_id: Option<Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::profiles::list,
        crate::profiles::detail,
        crate::profiles::create,
    ),
    components(
        schemas(
            HealthResponse,
            ProfileSummaryDoc,
            ProfileDetailDoc,
            PaginatedProfilesDoc,
            CreateProfileRequest,
            FieldErrorsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "profile")
    )
)]
pub struct ApiDoc;
