#![cfg(test)]
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection, EntityTrait};
use tempfile::TempDir;

use models::{company, label, profile};

/// A migrated SQLite database living in its own temp directory.
pub struct TestDb {
    pub db: DatabaseConnection,
    pub company_ids: Vec<i32>,
    pub profile_ids: Vec<i32>,
    _dir: TempDir,
}

pub async fn empty_db() -> Result<TestDb, anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("service.db").display());
    let db = Database::connect(&url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(TestDb { db, company_ids: Vec::new(), profile_ids: Vec::new(), _dir: dir })
}

struct Seed {
    name: &'static str,
    email: &'static str,
    tel: &'static str,
    company: usize,
    labels: &'static [&'static str],
}

const SEEDS: [Seed; 5] = [
    Seed { name: "테스트입니다.", email: "abcd@example.com", tel: "010-1234-5678", company: 0, labels: &["테스트 라벨 1", "테스트 라벨 2"] },
    Seed { name: "안녕하세요.", email: "pure@example.com", tel: "010-9876-5432", company: 0, labels: &["라벨 3", "라벨 4"] },
    Seed { name: "반갑습니다.", email: "red@example.com", tel: "010-5555-7777", company: 1, labels: &["라벨 5"] },
    Seed { name: "가나다라", email: "blue@example.com", tel: "010-9999-9999", company: 1, labels: &["라벨 6"] },
    Seed { name: "가나다라23", email: "zzz@example.com", tel: "010-1111-1111", company: 2, labels: &[] },
];

/// Three companies and five profiles. Only the first profile carries the
/// optional fields.
pub async fn seeded_db() -> Result<TestDb, anyhow::Error> {
    let mut t = empty_db().await?;
    for n in 1..=3 {
        t.company_ids.push(company::create(&t.db, &format!("Company {n}")).await?.id);
    }
    for (i, s) in SEEDS.iter().enumerate() {
        let mut new = profile::NewProfile {
            img_url: format!("http://example.com/img{}.jpg", i + 1),
            name: s.name.into(),
            email: s.email.into(),
            tel: s.tel.into(),
            rank: "사원".into(),
            company_id: Some(t.company_ids[s.company]),
            ..Default::default()
        };
        if i == 0 {
            new.memo = Some("메모 1".into());
            new.address = Some("서울시 강남구".into());
            new.birthday = NaiveDate::from_ymd_opt(1990, 5, 15);
            new.web_site = Some("http://www.example.com".into());
        }
        let row = profile::insert(&t.db, new).await?;
        let names: Vec<String> = s.labels.iter().map(|l| l.to_string()).collect();
        if !names.is_empty() {
            label::Entity::insert_many(label::new_rows(row.id, &names))
                .exec_without_returning(&t.db)
                .await?;
        }
        t.profile_ids.push(row.id);
    }
    Ok(t)
}
