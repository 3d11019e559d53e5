//! Table maintenance: id resequencing for the catalog tables.

use folio_core::resequence::{self, IdMapping};
use folio_core::types::DbId;
use sqlx::PgPool;

/// Destructive maintenance operations run from the admin CLI.
pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Rewrite `table` so its ids are `1..=n` in their existing order and
    /// reset the id sequence to `n + 1`.
    ///
    /// `table` must come from [`resequence::validate_table`]. Everything runs
    /// in one transaction holding an exclusive lock; on error the transaction
    /// is dropped and nothing changes. Returns the applied mapping, which is
    /// empty when the ids were already sequential.
    pub async fn resequence_ids(
        pool: &PgPool,
        table: &'static str,
    ) -> Result<Vec<IdMapping>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(&format!("LOCK TABLE {table} IN ACCESS EXCLUSIVE MODE"))
            .execute(&mut *tx)
            .await?;

        let ids: Vec<DbId> = sqlx::query_scalar(&format!("SELECT id FROM {table} ORDER BY id"))
            .fetch_all(&mut *tx)
            .await?;

        if resequence::is_sequential(&ids) {
            reset_sequence(&mut tx, table, ids.len() as DbId).await?;
            tx.commit().await?;
            tracing::info!(table, rows = ids.len(), "Ids already sequential");
            return Ok(Vec::new());
        }

        let columns: Vec<String> = sqlx::query_scalar(
            "SELECT quote_ident(column_name::text) FROM information_schema.columns \
             WHERE table_schema = current_schema() AND table_name = $1 AND column_name <> 'id' \
             ORDER BY ordinal_position",
        )
        .bind(table)
        .fetch_all(&mut *tx)
        .await?;
        let columns = columns.join(", ");

        sqlx::query(&format!(
            "CREATE TEMP TABLE resequence_snapshot ON COMMIT DROP AS SELECT * FROM {table}"
        ))
        .execute(&mut *tx)
        .await?;

        sqlx::query(&format!("TRUNCATE {table} RESTART IDENTITY"))
            .execute(&mut *tx)
            .await?;

        sqlx::query(&format!(
            "INSERT INTO {table} ({columns}) \
             SELECT {columns} FROM resequence_snapshot ORDER BY id"
        ))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let plan = resequence::plan_resequence(&ids);
        tracing::info!(
            table,
            rows = plan.len(),
            changed = resequence::changed(&plan).count(),
            "Ids resequenced",
        );
        Ok(plan)
    }
}

/// Point the id sequence just past `max_id` so the next insert gets `max_id + 1`.
async fn reset_sequence(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    table: &'static str,
    max_id: DbId,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT setval(pg_get_serial_sequence($1, 'id'), $2, false)")
        .bind(table)
        .bind(max_id + 1)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
