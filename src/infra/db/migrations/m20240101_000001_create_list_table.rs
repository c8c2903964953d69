//! Migration: Create the list table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(List::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(List::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(List::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(List::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(List::Name).string_len(20).not_null())
                    .col(ColumnDef::new(List::State).string_len(20).not_null())
                    .col(ColumnDef::new(List::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(List::Email).string_len(40).not_null())
                    .col(ColumnDef::new(List::Address).string_len(200).not_null())
                    .col(
                        ColumnDef::new(List::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Exact-match lookups by name
        manager
            .create_index(
                Index::create()
                    .name("idx_list_name")
                    .table(List::Table)
                    .col(List::Name)
                    .to_owned(),
            )
            .await?;

        // Soft-deleted rows are filtered out of every read
        manager
            .create_index(
                Index::create()
                    .name("idx_list_deleted_at")
                    .table(List::Table)
                    .col(List::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(List::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum List {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
    State,
    Phone,
    Email,
    Address,
    DeletedAt,
}
