use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Foods {
    Table,
    Id,
    FoodName,
    FoodImage,
    FoodQuantity,
    PickupLocation,
    ExpiredDateTime,
    ExpiresAtMs,
    AdditionalNotes,
    Donor,
    DonorEmail,
    FoodStatus,
    RequestDate,
    BenefactorEmail,
    BenefactorName,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Foods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Foods::Id)
                            .string_len(26)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Foods::FoodName).text().null())
                    .col(ColumnDef::new(Foods::FoodImage).text().null())
                    .col(ColumnDef::new(Foods::FoodQuantity).json().null())
                    .col(ColumnDef::new(Foods::PickupLocation).text().null())
                    .col(ColumnDef::new(Foods::ExpiredDateTime).json().null())
                    .col(ColumnDef::new(Foods::ExpiresAtMs).big_integer().null())
                    .col(ColumnDef::new(Foods::AdditionalNotes).text().null())
                    .col(ColumnDef::new(Foods::Donor).json().not_null())
                    .col(ColumnDef::new(Foods::DonorEmail).text().not_null())
                    .col(ColumnDef::new(Foods::FoodStatus).text().null())
                    .col(ColumnDef::new(Foods::RequestDate).json().null())
                    .col(ColumnDef::new(Foods::BenefactorEmail).text().null())
                    .col(ColumnDef::new(Foods::BenefactorName).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_foods_donor_email")
                    .table(Foods::Table)
                    .col(Foods::DonorEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_foods_benefactor_email")
                    .table(Foods::Table)
                    .col(Foods::BenefactorEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_foods_expires_at_ms")
                    .table(Foods::Table)
                    .col(Foods::ExpiresAtMs)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Foods::Table).if_exists().to_owned())
            .await
    }
}
