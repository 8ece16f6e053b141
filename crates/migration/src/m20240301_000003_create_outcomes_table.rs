use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_reference_tables::Objectives,
    m20240301_000002_create_indicators_table::Indicators,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outcomes::Table)
                    .if_not_exists()
                    .col(pk_auto(Outcomes::Id))
                    .col(string_len(Outcomes::Name, 255).default(""))
                    .col(integer_null(Outcomes::IndicatorId))
                    .col(crate::amount_null(manager, Outcomes::AchievedPercent))
                    .col(text(Outcomes::Description).default(""))
                    .col(uuid_null(Outcomes::CreatedBy))
                    .col(timestamp_with_time_zone_null(Outcomes::CreateDate))
                    .col(timestamp_with_time_zone_null(Outcomes::EditDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outcomes_indicator_id")
                            .from(Outcomes::Table, Outcomes::IndicatorId)
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
                    .name("idx_outcomes_indicator_id")
                    .table(Outcomes::Table)
                    .col(Outcomes::IndicatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OutcomeObjectives::Table)
                    .if_not_exists()
                    .col(pk_auto(OutcomeObjectives::Id))
                    .col(integer(OutcomeObjectives::OutcomeId))
                    .col(integer(OutcomeObjectives::ObjectiveId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outcome_objectives_outcome_id")
                            .from(OutcomeObjectives::Table, OutcomeObjectives::OutcomeId)
                            .to(Outcomes::Table, Outcomes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outcome_objectives_objective_id")
                            .from(OutcomeObjectives::Table, OutcomeObjectives::ObjectiveId)
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
                    .name("idx_outcome_objectives_pair")
                    .table(OutcomeObjectives::Table)
                    .col(OutcomeObjectives::OutcomeId)
                    .col(OutcomeObjectives::ObjectiveId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IndicatorOutcomes::Table)
                    .if_not_exists()
                    .col(pk_auto(IndicatorOutcomes::Id))
                    .col(integer(IndicatorOutcomes::IndicatorId))
                    .col(integer(IndicatorOutcomes::OutcomeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicator_outcomes_indicator_id")
                            .from(IndicatorOutcomes::Table, IndicatorOutcomes::IndicatorId)
                            .to(Indicators::Table, Indicators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_indicator_outcomes_outcome_id")
                            .from(IndicatorOutcomes::Table, IndicatorOutcomes::OutcomeId)
                            .to(Outcomes::Table, Outcomes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_indicator_outcomes_pair")
                    .table(IndicatorOutcomes::Table)
                    .col(IndicatorOutcomes::IndicatorId)
                    .col(IndicatorOutcomes::OutcomeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IndicatorOutcomes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OutcomeObjectives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Outcomes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Outcomes {
    Table,
    Id,
    Name,
    IndicatorId,
    AchievedPercent,
    Description,
    CreatedBy,
    CreateDate,
    EditDate,
}

#[derive(DeriveIden)]
enum OutcomeObjectives {
    Table,
    Id,
    OutcomeId,
    ObjectiveId,
}

#[derive(DeriveIden)]
enum IndicatorOutcomes {
    Table,
    Id,
    IndicatorId,
    OutcomeId,
}
