//! Create `companies` table.
//!
//! Organisations a profile may belong to.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(pk_auto(Companies::Id))
                    .col(string_len(Companies::Name, 100).not_null())
                    .col(timestamp_with_time_zone(Companies::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Companies::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Companies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Companies { Table, Id, Name, CreatedAt, UpdatedAt }
