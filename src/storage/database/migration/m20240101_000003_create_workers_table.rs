use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Workers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Workers::Fullname).string_len(40).not_null())
                    .col(ColumnDef::new(Workers::Position).string_len(40).not_null())
                    .col(ColumnDef::new(Workers::Salary).double().not_null())
                    .col(ColumnDef::new(Workers::Gender).string_len(8).not_null())
                    .col(ColumnDef::new(Workers::ContactEmail).string_len(254).null())
                    .col(
                        ColumnDef::new(Workers::ContactMobileNumber)
                            .string_len(16)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Workers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Workers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_workers_created_at")
                    .table(Workers::Table)
                    .col(Workers::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Workers {
    Table,
    Id,
    Fullname,
    Position,
    Salary,
    Gender,
    ContactEmail,
    ContactMobileNumber,
    CreatedAt,
    UpdatedAt,
}
