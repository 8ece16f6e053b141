use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_reference_tables::Levels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // sort_array is JSON rather than an integer array so SQLite can hold it too
        manager
            .create_table(
                Table::create()
                    .table(IndicatorSorts::Table)
                    .if_not_exists()
                    .col(pk_auto(IndicatorSorts::Id))
                    .col(uuid_null(IndicatorSorts::Workflowlevel1))
                    .col(integer_null(IndicatorSorts::LevelId))
                    .col(json_null(IndicatorSorts::SortArray))
                    .col(timestamp_with_time_zone_null(IndicatorSorts::CreateDate))
                    .col(timestamp_with_time_zone_null(IndicatorSorts::EditDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicator_sorts_level_id")
                            .from(IndicatorSorts::Table, IndicatorSorts::LevelId)
                            .to(Levels::Table, Levels::Id)
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
                    .name("idx_indicator_sorts_workflowlevel1_level_id")
                    .table(IndicatorSorts::Table)
                    .col(IndicatorSorts::Workflowlevel1)
                    .col(IndicatorSorts::LevelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IndicatorSorts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum IndicatorSorts {
    Table,
    Id,
    Workflowlevel1,
    LevelId,
    SortArray,
    CreateDate,
    EditDate,
}
