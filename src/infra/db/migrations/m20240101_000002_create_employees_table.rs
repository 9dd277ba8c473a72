//! Migration: Create employees table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Employees::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Employees::Name).string().null())
                    .col(ColumnDef::new(Employees::Age).integer().null())
                    .col(ColumnDef::new(Employees::Email).string().null())
                    .col(ColumnDef::new(Employees::DateOfBirth).date().null())
                    .col(ColumnDef::new(Employees::YearsExperience).integer().null())
                    .col(ColumnDef::new(Employees::Gender).string().null())
                    .col(ColumnDef::new(Employees::Department).string().null())
                    .col(ColumnDef::new(Employees::Skills).json_binary().not_null())
                    .col(ColumnDef::new(Employees::Address).string().null())
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing returns records in insertion order
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_created_at")
                    .table(Employees::Table)
                    .col(Employees::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_employees_created_at")
                    .table(Employees::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    Age,
    Email,
    DateOfBirth,
    YearsExperience,
    Gender,
    Department,
    Skills,
    Address,
    CreatedAt,
    UpdatedAt,
}
