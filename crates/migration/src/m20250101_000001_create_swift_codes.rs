//! Create `swift_codes` table.
//! One row per bank identifier; the identifier itself is the primary key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SwiftCodes::Table)
                    .if_not_exists()
                    .col(string_len(SwiftCodes::CountryIso2, 2).not_null())
                    .col(string_len(SwiftCodes::SwiftCode, 11).primary_key())
                    .col(text(SwiftCodes::CodeType).not_null())
                    .col(text(SwiftCodes::BankName).not_null())
                    .col(text(SwiftCodes::Address).not_null())
                    .col(text_null(SwiftCodes::TownName))
                    .col(text(SwiftCodes::CountryName).not_null())
                    .col(text_null(SwiftCodes::TimeZone))
                    .col(boolean(SwiftCodes::IsHeadquarter).not_null())
                    .to_owned(),
            )
            .await?;

        // Country lookups filter on this column
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_swift_codes_country_iso2")
                    .table(SwiftCodes::Table)
                    .col(SwiftCodes::CountryIso2)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SwiftCodes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SwiftCodes {
    Table,
    CountryIso2,
    SwiftCode,
    CodeType,
    BankName,
    Address,
    TownName,
    CountryName,
    TimeZone,
    IsHeadquarter,
}
