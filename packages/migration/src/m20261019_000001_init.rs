use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Kinds {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Posts {
    Table,
    Id,
    Latitude,
    Longitude,
    Text,
    Image,
    Kind,
    Title,
    Address,
    Upvotes,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // kinds table
        manager
            .create_table(
                Table::create()
                    .table(Kinds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Kinds::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Kinds::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // posts table; `kind` references kinds.name so storage rejects unknown kinds
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Posts::Latitude).double().not_null())
                    .col(ColumnDef::new(Posts::Longitude).double().not_null())
                    .col(ColumnDef::new(Posts::Text).text().not_null())
                    .col(ColumnDef::new(Posts::Image).binary().not_null())
                    .col(ColumnDef::new(Posts::Kind).string().not_null())
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Address).string().not_null())
                    .col(
                        ColumnDef::new(Posts::Upvotes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_kind")
                            .from(Posts::Table, Posts::Kind)
                            .to(Kinds::Table, Kinds::Name)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_posts_kind")
                    .table(Posts::Table)
                    .col(Posts::Kind)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Kinds::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
