//! Create `candidate` table.
//!
//! Single table, auto-increment integer primary key, all fields required.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidate::Id))
                    .col(string_len(Candidate::FullName, 100).not_null())
                    .col(string_len(Candidate::Mobile, 16).not_null())
                    .col(string_len(Candidate::Email, 100).not_null())
                    .col(integer(Candidate::Age).not_null())
                    .col(string_len(Candidate::BloodGroup, 3).not_null())
                    .col(string_len(Candidate::Address, 100).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Candidate::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Candidate { Table, Id, FullName, Mobile, Email, Age, BloodGroup, Address }
