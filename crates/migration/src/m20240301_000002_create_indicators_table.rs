use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_reference_tables::{IndicatorTypes, Levels, Objectives};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Indicators::Table)
                    .if_not_exists()
                    .col(pk_auto(Indicators::Id))
                    .col(string_len_uniq(Indicators::IndicatorUuid, 255))
                    .col(integer_null(Indicators::LevelId))
                    .col(string_len(Indicators::Name, 255))
                    .col(text_null(Indicators::Definition))
                    .col(text_null(Indicators::Comments))
                    .col(uuid_null(Indicators::Workflowlevel1))
                    .col(boolean(Indicators::KeyPerformanceIndicator).default(false))
                    .col(string_len_null(Indicators::Direction, 15))
                    .col(string_len_null(Indicators::ActualFormula, 15))
                    .col(crate::amount_null(manager, Indicators::Actuals))
                    .col(text_null(Indicators::Notes))
                    .col(uuid_null(Indicators::CreatedBy))
                    .col(timestamp_with_time_zone_null(Indicators::CreateDate))
                    .col(timestamp_with_time_zone_null(Indicators::EditDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicators_level_id")
                            .from(Indicators::Table, Indicators::LevelId)
                            .to(Levels::Table, Levels::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_indicators_level_id", Indicators::LevelId),
            ("idx_indicators_workflowlevel1", Indicators::Workflowlevel1),
            ("idx_indicators_create_date", Indicators::CreateDate),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Indicators::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(IndicatorIndicatorTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(IndicatorIndicatorTypes::Id))
                    .col(integer(IndicatorIndicatorTypes::IndicatorId))
                    .col(integer(IndicatorIndicatorTypes::IndicatorTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicator_indicator_types_indicator_id")
                            .from(
                                IndicatorIndicatorTypes::Table,
                                IndicatorIndicatorTypes::IndicatorId,
                            )
                            .to(Indicators::Table, Indicators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicator_indicator_types_indicator_type_id")
                            .from(
                                IndicatorIndicatorTypes::Table,
                                IndicatorIndicatorTypes::IndicatorTypeId,
                            )
                            .to(IndicatorTypes::Table, IndicatorTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_indicator_indicator_types_pair")
                    .table(IndicatorIndicatorTypes::Table)
                    .col(IndicatorIndicatorTypes::IndicatorId)
                    .col(IndicatorIndicatorTypes::IndicatorTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IndicatorObjectives::Table)
                    .if_not_exists()
                    .col(pk_auto(IndicatorObjectives::Id))
                    .col(integer(IndicatorObjectives::IndicatorId))
                    .col(integer(IndicatorObjectives::ObjectiveId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicator_objectives_indicator_id")
                            .from(IndicatorObjectives::Table, IndicatorObjectives::IndicatorId)
                            .to(Indicators::Table, Indicators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicator_objectives_objective_id")
                            .from(IndicatorObjectives::Table, IndicatorObjectives::ObjectiveId)
                            .to(Objectives::Table, Objectives::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_indicator_objectives_pair")
                    .table(IndicatorObjectives::Table)
                    .col(IndicatorObjectives::IndicatorId)
                    .col(IndicatorObjectives::ObjectiveId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IndicatorObjectives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IndicatorIndicatorTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Indicators::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Indicators {
    Table,
    Id,
    IndicatorUuid,
    LevelId,
    Name,
    Definition,
    Comments,
    Workflowlevel1,
    KeyPerformanceIndicator,
    Direction,
    ActualFormula,
    Actuals,
    Notes,
    CreatedBy,
    CreateDate,
    EditDate,
}

#[derive(DeriveIden)]
enum IndicatorIndicatorTypes {
    Table,
    Id,
    IndicatorId,
    IndicatorTypeId,
}

#[derive(DeriveIden)]
enum IndicatorObjectives {
    Table,
    Id,
    IndicatorId,
    ObjectiveId,
}
