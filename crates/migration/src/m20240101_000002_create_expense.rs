//! Create `expense` table.
//!
//! `restaurant_id` is plain text without a foreign key: expenses may outlive
//! the restaurant they point at. Columns are nullable because clients may
//! send any field as `null`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(uuid(Expense::Id).primary_key())
                    .col(text_null(Expense::RestaurantId))
                    .col(double_null(Expense::Amount))
                    .col(text_null(Expense::PaymentMethod))
                    .col(text_null(Expense::Mode))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Expense::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Expense {
    Table,
    Id,
    RestaurantId,
    Amount,
    PaymentMethod,
    Mode,
}
