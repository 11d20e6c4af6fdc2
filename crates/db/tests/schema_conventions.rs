//! Conventions the live schema must uphold.

use forgeline_db::store::Table;
use sqlx::PgPool;

/// Every table in the closed set must exist after migrations, so a
/// [`Table`]-routed query can never hit an undefined relation.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_known_tables_exist(pool: PgPool) {
    for table in Table::ALL {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM information_schema.tables
                 WHERE table_schema = 'public' AND table_name = $1
             )",
        )
        .bind(table.as_str())
        .fetch_one(&pool)
        .await
        .expect("schema query should succeed");
        assert!(exists, "table '{}' is missing", table.as_str());
    }
}

/// Every known table carries a UUID primary key named `id`.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_known_tables_have_uuid_ids(pool: PgPool) {
    for table in Table::ALL {
        let data_type: Option<String> = sqlx::query_scalar(
            "SELECT data_type FROM information_schema.columns
             WHERE table_schema = 'public' AND table_name = $1 AND column_name = 'id'",
        )
        .bind(table.as_str())
        .fetch_optional(&pool)
        .await
        .expect("schema query should succeed");
        assert_eq!(
            data_type.as_deref(),
            Some("uuid"),
            "table '{}' must have a uuid id column",
            table.as_str()
        );
    }
}

/// Tables that track mutation carry an `updated_at` column.
#[sqlx::test(migrations = "./migrations")]
async fn test_mutable_tables_have_updated_at(pool: PgPool) {
    for table in [
        Table::Users,
        Table::Profiles,
        Table::Projects,
        Table::Gallery,
        Table::Meetings,
        Table::ContactMessages,
    ] {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM information_schema.columns
                 WHERE table_schema = 'public' AND table_name = $1
                   AND column_name = 'updated_at'
             )",
        )
        .bind(table.as_str())
        .fetch_one(&pool)
        .await
        .expect("schema query should succeed");
        assert!(exists, "table '{}' must have updated_at", table.as_str());
    }
}
