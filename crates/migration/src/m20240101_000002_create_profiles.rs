//! Create `profiles` table with a nullable FK to `companies`.
//!
//! Deleting a company clears `company_id` on its profiles instead of
//! deleting them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(pk_auto(Profiles::Id))
                    .col(string_len(Profiles::ImgUrl, 400).not_null())
                    .col(string_len(Profiles::Name, 50).not_null())
                    .col(string_len(Profiles::Email, 100).not_null())
                    .col(string_len(Profiles::Tel, 20).not_null())
                    .col(string_len(Profiles::Rank, 100).not_null())
                    .col(string_len_null(Profiles::Address, 500))
                    .col(date_null(Profiles::Birthday))
                    .col(string_len_null(Profiles::WebSite, 400))
                    .col(text_null(Profiles::Memo))
                    .col(integer_null(Profiles::CompanyId))
                    .col(timestamp_with_time_zone(Profiles::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Profiles::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_company")
                            .from(Profiles::Table, Profiles::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Profiles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    ImgUrl,
    Name,
    Email,
    Tel,
    Rank,
    Address,
    Birthday,
    WebSite,
    Memo,
    CompanyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Companies { Table, Id }
