use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000002_create_indicators_table::Indicators;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PeriodicTargets::Table)
                    .if_not_exists()
                    .col(pk_auto(PeriodicTargets::Id))
                    .col(integer_null(PeriodicTargets::IndicatorId))
                    .col(string_len_null(PeriodicTargets::Period, 255))
                    .col(crate::amount(manager, PeriodicTargets::Target).default(0))
                    .col(integer_null(PeriodicTargets::Customsort))
                    .col(timestamp_with_time_zone_null(PeriodicTargets::CreateDate))
                    .col(timestamp_with_time_zone_null(PeriodicTargets::EditDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_periodic_targets_indicator_id")
                            .from(PeriodicTargets::Table, PeriodicTargets::IndicatorId)
                            .to(Indicators::Table, Indicators::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_periodic_targets_indicator_id")
                    .table(PeriodicTargets::Table)
                    .col(PeriodicTargets::IndicatorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PeriodicTargets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PeriodicTargets {
    Table,
    Id,
    IndicatorId,
    Period,
    Target,
    Customsort,
    CreateDate,
    EditDate,
}
