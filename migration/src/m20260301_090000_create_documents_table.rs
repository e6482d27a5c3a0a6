//! One table for every content collection (`profiles`, `projects`,
//! `user_roles`, `contact_messages`, ...). Entity fields live in `data`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Documents::Collection)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documents::Id).uuid().not_null())
                    .col(ColumnDef::new(Documents::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Documents::Data)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Documents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Documents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_documents")
                            .col(Documents::Collection)
                            .col(Documents::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_documents_collection_user")
                    .table(Documents::Table)
                    .col(Documents::Collection)
                    .col(Documents::UserId)
                    .to_owned(),
            )
            .await?;

        // Containment filters (`data @> '{"type":"work"}'`)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_documents_data
                ON documents USING GIN (data jsonb_path_ops);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_documents_updated_at
                BEFORE UPDATE ON documents
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_documents_updated_at ON documents")
            .await?;

        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Collection,
    Id,
    UserId,
    Data,
    CreatedAt,
    UpdatedAt,
}
