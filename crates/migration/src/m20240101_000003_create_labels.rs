//! Create `labels` table with FK to `profiles`.
//!
//! Labels die with their profile.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Labels::Table)
                    .if_not_exists()
                    .col(pk_auto(Labels::Id))
                    .col(string_len(Labels::Name, 50).not_null())
                    .col(integer(Labels::ProfileId).not_null())
                    .col(timestamp_with_time_zone(Labels::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Labels::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_labels_profile")
                            .from(Labels::Table, Labels::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Labels::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Labels { Table, Id, Name, ProfileId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Profiles { Table, Id }
