use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IndicatorTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(IndicatorTypes::Id))
                    .col(string_len(IndicatorTypes::IndicatorType, 135).default(""))
                    .col(text(IndicatorTypes::Description).default(""))
                    .col(boolean(IndicatorTypes::DefaultGlobal).default(false))
                    .col(uuid_null(IndicatorTypes::Organization))
                    .col(timestamp_with_time_zone_null(IndicatorTypes::CreateDate))
                    .col(timestamp_with_time_zone_null(IndicatorTypes::EditDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Objectives::Table)
                    .if_not_exists()
                    .col(pk_auto(Objectives::Id))
                    .col(string_len(Objectives::Name, 135).default(""))
                    .col(uuid_null(Objectives::Workflowlevel1))
                    .col(text(Objectives::Description).default(""))
                    .col(uuid_null(Objectives::CreatedBy))
                    .col(timestamp_with_time_zone_null(Objectives::CreateDate))
                    .col(timestamp_with_time_zone_null(Objectives::EditDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_objectives_workflowlevel1_name")
                    .table(Objectives::Table)
                    .col(Objectives::Workflowlevel1)
                    .col(Objectives::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Levels::Table)
                    .if_not_exists()
                    .col(pk_auto(Levels::Id))
                    .col(string_len(Levels::Name, 135).default(""))
                    .col(uuid_null(Levels::Workflowlevel1))
                    .col(integer(Levels::Sort).default(0))
                    .col(uuid_null(Levels::Organization))
                    .col(integer(Levels::ParentId).default(0))
                    .col(boolean(Levels::GlobalDefault).default(false))
                    .col(text(Levels::Description).default(""))
                    .col(string_len(Levels::Color, 135).default(""))
                    .col(uuid_null(Levels::CreatedBy))
                    .col(timestamp_with_time_zone_null(Levels::CreateDate))
                    .col(timestamp_with_time_zone_null(Levels::EditDate))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Levels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Objectives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IndicatorTypes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum IndicatorTypes {
    Table,
    Id,
    IndicatorType,
    Description,
    DefaultGlobal,
    Organization,
    CreateDate,
    EditDate,
}

#[derive(DeriveIden)]
pub enum Objectives {
    Table,
    Id,
    Name,
    Workflowlevel1,
    Description,
    CreatedBy,
    CreateDate,
    EditDate,
}

#[derive(DeriveIden)]
pub enum Levels {
    Table,
    Id,
    Name,
    Workflowlevel1,
    Sort,
    Organization,
    ParentId,
    GlobalDefault,
    Description,
    Color,
    CreatedBy,
    CreateDate,
    EditDate,
}
