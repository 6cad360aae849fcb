

use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use tempfile::TempDir;

/// A migrated SQLite database living in its own temp directory.
/// The directory is removed when this is dropped.
pub struct TestDb {
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub async fn setup_test_db() -> Result<TestDb> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("models.db").display());
    let db = Database::connect(url).await?;
    crate::db::migrate(&db).await?;
    Ok(TestDb { db, _dir: dir })
}
