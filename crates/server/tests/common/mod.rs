#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::Value;
use tempfile::TempDir;
use tower::Service;

use configs::DatabaseConfig;
use models::{company, label, profile};
use server::{routes, state::ServerState};

pub struct TestApp {
    pub app: Router,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

const PROFILES: [(&str, &str, &str, i32, &[&str]); 5] = [
    ("테스트입니다.", "abcd@example.com", "010-1234-5678", 1, &["테스트 라벨 1", "테스트 라벨 2"]),
    ("안녕하세요.", "pure@example.com", "010-9876-5432", 1, &["라벨 3", "라벨 4"]),
    ("반갑습니다.", "red@example.com", "010-5555-7777", 2, &["라벨 5"]),
    ("가나다라", "blue@example.com", "010-9999-9999", 2, &["라벨 6"]),
    ("가나다라23", "zzz@example.com", "010-1111-1111", 3, &[]),
];

/// Fresh migrated SQLite store with companies 1-3 and profiles 1-5.
pub async fn seeded_app() -> anyhow::Result<TestApp> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("api.db").display()),
        max_connections: 4,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    models::db::migrate(&db).await?;

    for n in 1..=3 {
        company::create(&db, &format!("Company {n}")).await?;
    }
    for (i, (name, email, tel, company_id, labels)) in PROFILES.iter().enumerate() {
        let mut new = profile::NewProfile {
            img_url: format!("http://example.com/img{}.jpg", i + 1),
            name: name.to_string(),
            email: email.to_string(),
            tel: tel.to_string(),
            rank: "사원".into(),
            company_id: Some(*company_id),
            ..Default::default()
        };
        if i == 0 {
            new.memo = Some("메모 1".into());
            new.address = Some("서울시 강남구".into());
            new.birthday = NaiveDate::from_ymd_opt(1990, 5, 15);
            new.web_site = Some("http://www.example.com".into());
        }
        let row = profile::insert(&db, new).await?;
        let names: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        if !names.is_empty() {
            label::Entity::insert_many(label::new_rows(row.id, &names))
                .exec_without_returning(&db)
                .await?;
        }
    }

    let app = routes::build_router(tower_http::cors::CorsLayer::very_permissive(), ServerState::new(db.clone()));
    Ok(TestApp { app, db, _dir: dir })
}

pub fn valid_payload() -> Value {
    serde_json::json!({
        "img_url": "http://example.com/img.jpg",
        "name": "테스트",
        "email": "test@example.com",
        "tel": "010-1234-5678",
        "rank": "매니저",
        "address": "테스트 데이터",
        "birthday": "1990-01-01",
        "web_site": "http://www.example.com",
        "memo": "Test memo",
        "company_id": 1,
        "labels": ["Label 1", "Label 2"]
    })
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(axum::http::StatusCode, Value)> {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header("host", "testserver")
        .body(Body::empty())?;
    read(app.clone().call(req).await?).await
}

pub async fn get_status(app: &Router, uri: &str) -> anyhow::Result<axum::http::StatusCode> {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    Ok(app.clone().call(req).await?.status())
}

pub async fn post_raw(app: &Router, uri: &str, body: impl Into<Body>) -> anyhow::Result<(axum::http::StatusCode, Value)> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("host", "testserver")
        .header("content-type", "application/json")
        .body(body.into())?;
    read(app.clone().call(req).await?).await
}

pub async fn post(app: &Router, uri: &str, body: &Value) -> anyhow::Result<(axum::http::StatusCode, Value)> {
    post_raw(app, uri, serde_json::to_vec(body)?).await
}

async fn read(resp: Response<Body>) -> anyhow::Result<(axum::http::StatusCode, Value)> {
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}
