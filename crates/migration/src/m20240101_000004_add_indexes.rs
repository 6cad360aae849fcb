use sea_orm_migration::prelude::*;

const PROFILE_INDEXES: [(&str, Profiles); 4] = [
    ("idx_profiles_company", Profiles::CompanyId),
    ("idx_profiles_name", Profiles::Name),
    ("idx_profiles_email", Profiles::Email),
    ("idx_profiles_tel", Profiles::Tel),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Profiles: FK lookup plus one index per sortable column
        for (name, col) in PROFILE_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Profiles::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        // Labels: fetched per profile
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_labels_profile")
                    .table(Labels::Table)
                    .col(Labels::ProfileId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, _) in PROFILE_INDEXES {
            manager
                .drop_index(Index::drop().name(name).table(Profiles::Table).to_owned())
                .await?;
        }
        manager
            .drop_index(Index::drop().name("idx_labels_profile").table(Labels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Profiles { Table, CompanyId, Name, Email, Tel }

#[derive(DeriveIden)]
enum Labels { Table, ProfileId }
