//! Create movies table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Name).string().not_null())
                    .col(ColumnDef::new(Movies::Date).date().not_null())
                    .col(
                        ColumnDef::new(Movies::Score)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Movies::Genre).string().not_null())
                    .col(ColumnDef::new(Movies::Overview).text().not_null())
                    .col(ColumnDef::new(Movies::Crew).text().not_null())
                    .col(ColumnDef::new(Movies::OrigTitle).string().not_null())
                    .col(
                        ColumnDef::new(Movies::Status)
                            .string()
                            .not_null()
                            .default("Released"),
                    )
                    .col(ColumnDef::new(Movies::OrigLang).string().not_null())
                    .col(
                        ColumnDef::new(Movies::Budget)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Movies::Revenue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Movies::Country).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Listing pages are served in name-independent id order, but detail
        // lookups and admin tooling both search by name.
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_name")
                    .table(Movies::Table)
                    .col(Movies::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Movies {
    Table,
    Id,
    Name,
    Date,
    Score,
    Genre,
    Overview,
    Crew,
    OrigTitle,
    Status,
    OrigLang,
    Budget,
    Revenue,
    Country,
}
