use crate::domain::{
    card::entity::card,
    retrospective::entity::{participant, retrospective},
    vote::entity::vote,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement};
use std::env;
use tracing::info;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Successfully connected to the database.");

    // Check if schema update is enabled
    let should_update_schema = env::var("DB_SCHEMA_UPDATE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
            );
            false
        });

    if should_update_schema {
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

/// Creates tables and the indexes that back the uniqueness invariants.
/// Public so the test suite can sync the schema onto an in-memory database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // Order matters for foreign keys (parent first, then child).
    create_table_if_not_exists(db, &schema, retrospective::Entity).await?;
    create_table_if_not_exists(db, &schema, participant::Entity).await?;
    create_table_if_not_exists(db, &schema, card::Entity).await?;
    create_table_if_not_exists(db, &schema, vote::Entity).await?;

    // One anonymous identity per device per retrospective
    create_unique_index_if_not_exists(
        db,
        "uq_participants_session_retrospective",
        "participants",
        &["session_id", "retrospective_id"],
    )
    .await?;
    // One vote per participant per card; also rejects the same-participant
    // double-toggle race at the storage layer
    create_unique_index_if_not_exists(
        db,
        "uq_votes_card_participant",
        "votes",
        &["card_id", "participant_id"],
    )
    .await?;

    // Query-path indexes
    create_index_if_not_exists(db, "idx_cards_retrospective", "cards", &["retrospective_id"])
        .await?;
    create_index_if_not_exists(
        db,
        "idx_votes_participant_retrospective",
        "votes",
        &["participant_id", "retrospective_id"],
    )
    .await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let sql = format!("CREATE INDEX {} ON {} ({})", index_name, table_name, cols);
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate")
                || err_str.contains("already exists")
                || err_str.contains("exists")
            {
                Ok(())
            } else {
                tracing::error!("Failed to create index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_unique_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let sql = format!(
        "CREATE UNIQUE INDEX {} ON {} ({})",
        index_name, table_name, cols
    );
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            // Ignore duplicate index errors for idempotency.
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate")
                || err_str.contains("already exists")
                || err_str.contains("exists")
            {
                Ok(())
            } else {
                tracing::error!("Failed to create unique index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    match db.execute(create_stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to create table: {}", e);
            Err(e)
        }
    }
}
