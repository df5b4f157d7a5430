use parley_core::{
    catalog, ChannelId, DirtyUpdate, PermissionHolder, PermissionKind, PermissionRecord,
    StatementKind, UpdateAction,
};
use sqlx::{postgres::PgRow, PgPool, Postgres, Row, Transaction};
use tokio::sync::OnceCell;

use super::metrics::{
    record_load_skipped, LOAD_SKIP_REASON_MALFORMED_ROW, LOAD_SKIP_REASON_UNKNOWN_PERMISSION,
};

const SCHEMA_INIT_LOCK_ID: i64 = 0x5041_524c_4559_0001;

/// Older deployments stored unset facets as this value instead of NULL.
const LEGACY_NOT_GRANTED: i32 = -2;

const CREATE_PERMISSIONS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS permissions (
                    server_id BIGINT NOT NULL,
                    type SMALLINT NOT NULL,
                    id BIGINT NOT NULL,
                    channel_id BIGINT NOT NULL DEFAULT 0,
                    perm_id TEXT NOT NULL,
                    value INTEGER NULL,
                    \"grant\" INTEGER NULL,
                    flag_skip BOOLEAN NOT NULL DEFAULT FALSE,
                    flag_negate BOOLEAN NOT NULL DEFAULT FALSE,
                    PRIMARY KEY (server_id, type, id, channel_id, perm_id)
                )";
const CREATE_PERMISSIONS_HOLDER_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS idx_permissions_holder
                    ON permissions(server_id, type, id)";

const SELECT_HOLDER_ROWS_SQL: &str =
    "SELECT channel_id, perm_id, value, \"grant\", flag_skip, flag_negate
     FROM permissions
     WHERE server_id = $1 AND type = $2 AND id = $3";
const INSERT_ROW_SQL: &str = "INSERT INTO permissions
        (server_id, type, id, channel_id, perm_id, value, \"grant\", flag_skip, flag_negate)
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
     ON CONFLICT (server_id, type, id, channel_id, perm_id) DO UPDATE
     SET value = EXCLUDED.value,
         \"grant\" = EXCLUDED.\"grant\",
         flag_skip = EXCLUDED.flag_skip,
         flag_negate = EXCLUDED.flag_negate";
const UPDATE_ROW_SQL: &str = "UPDATE permissions
     SET value = CASE WHEN $10 THEN $6 ELSE value END,
         \"grant\" = CASE WHEN $11 THEN $7 ELSE \"grant\" END,
         flag_skip = $8,
         flag_negate = $9
     WHERE server_id = $1 AND type = $2 AND id = $3 AND channel_id = $4 AND perm_id = $5";
const DELETE_ROW_SQL: &str = "DELETE FROM permissions
     WHERE server_id = $1 AND type = $2 AND id = $3 AND channel_id = $4 AND perm_id = $5";
const DELETE_HOLDER_ROWS_SQL: &str =
    "DELETE FROM permissions WHERE server_id = $1 AND type = $2 AND id = $3";

pub(crate) async fn ensure_db_schema(
    pool: &PgPool,
    init: &OnceCell<()>,
) -> Result<(), sqlx::Error> {
    init.get_or_try_init(|| async move {
        let mut tx = pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_INIT_LOCK_ID)
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_PERMISSIONS_TABLE_SQL)
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_PERMISSIONS_HOLDER_INDEX_SQL)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!("permission schema ready");
        Ok::<(), sqlx::Error>(())
    })
    .await?;
    Ok(())
}

/// Primary key of one stored permission row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct RowKey {
    pub(crate) server_id: i64,
    pub(crate) holder_type: i16,
    pub(crate) entity_id: i64,
    pub(crate) channel_id: i64,
    pub(crate) perm_id: String,
}

impl RowKey {
    pub(crate) fn new(
        holder: &PermissionHolder,
        channel_id: Option<ChannelId>,
        kind: PermissionKind,
    ) -> Self {
        Self {
            server_id: column_id(holder.server_id.get()),
            holder_type: holder.kind.sql_type(),
            entity_id: column_id(holder.entity_id),
            channel_id: channel_id.map_or(0, |channel| column_id(channel.get())),
            perm_id: kind.name().to_owned(),
        }
    }
}

/// Column values of one stored permission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StoredRow {
    pub(crate) value: Option<i32>,
    pub(crate) grant: Option<i32>,
    pub(crate) flag_skip: bool,
    pub(crate) flag_negate: bool,
}

impl StoredRow {
    pub(crate) fn from_update(update: &DirtyUpdate) -> Self {
        Self {
            value: update.value.as_option(),
            grant: update.grant.as_option(),
            flag_skip: update.skip,
            flag_negate: update.negate,
        }
    }

    /// Applies an UPDATE statement, leaving untouched facets as stored.
    pub(crate) fn merge(&mut self, update: &DirtyUpdate) {
        if update.update_value != UpdateAction::DoNothing {
            self.value = update.value.as_option();
        }
        if update.update_grant != UpdateAction::DoNothing {
            self.grant = update.grant.as_option();
        }
        self.flag_skip = update.skip;
        self.flag_negate = update.negate;
    }

    pub(crate) fn record(self) -> PermissionRecord {
        PermissionRecord {
            value: self.value.filter(|value| *value != LEGACY_NOT_GRANTED),
            grant: self.grant.filter(|grant| *grant != LEGACY_NOT_GRANTED),
            skip: self.flag_skip,
            negate: self.flag_negate,
        }
    }
}

// Ids are stored in signed BIGINT columns; the bit pattern is preserved.
#[allow(clippy::cast_possible_wrap)]
const fn column_id(id: u64) -> i64 {
    id as i64
}

#[allow(clippy::cast_sign_loss)]
const fn entity_id(column: i64) -> u64 {
    column as u64
}

/// A decoded row ready to be handed to a permission store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HydratedRow {
    pub(crate) kind: PermissionKind,
    pub(crate) channel_id: Option<ChannelId>,
    pub(crate) record: PermissionRecord,
}

/// Resolves the stored permission name, skipping rows the catalog does not know.
pub(crate) fn hydrated_row(
    holder: &PermissionHolder,
    channel_id: i64,
    perm_id: &str,
    row: StoredRow,
) -> Option<HydratedRow> {
    let kind = match catalog().resolve_by_name(perm_id) {
        Ok(kind) if !kind.is_grant() => kind,
        Ok(_) | Err(_) => {
            tracing::warn!(
                %holder,
                permission = perm_id,
                "skipping stored row with unknown permission"
            );
            record_load_skipped(LOAD_SKIP_REASON_UNKNOWN_PERMISSION);
            return None;
        }
    };
    Some(HydratedRow {
        kind,
        channel_id: (channel_id != 0).then(|| ChannelId(entity_id(channel_id))),
        record: row.record(),
    })
}

fn decode_row(holder: &PermissionHolder, row: &PgRow) -> Result<HydratedRow, Option<&'static str>> {
    let column = |name: &'static str, error: sqlx::Error| {
        tracing::warn!(%holder, column = name, %error, "skipping malformed permission row");
        Some(name)
    };
    let channel_id: i64 = row
        .try_get("channel_id")
        .map_err(|e| column("channel_id", e))?;
    let perm_id: String = row.try_get("perm_id").map_err(|e| column("perm_id", e))?;
    let stored = StoredRow {
        value: row.try_get("value").map_err(|e| column("value", e))?,
        grant: row.try_get("grant").map_err(|e| column("grant", e))?,
        flag_skip: row.try_get("flag_skip").map_err(|e| column("flag_skip", e))?,
        flag_negate: row
            .try_get("flag_negate")
            .map_err(|e| column("flag_negate", e))?,
    };
    hydrated_row(holder, channel_id, &perm_id, stored).ok_or(None)
}

pub(crate) async fn select_holder_rows(
    pool: &PgPool,
    holder: &PermissionHolder,
) -> Result<Vec<HydratedRow>, sqlx::Error> {
    let rows = sqlx::query(SELECT_HOLDER_ROWS_SQL)
        .bind(column_id(holder.server_id.get()))
        .bind(holder.kind.sql_type())
        .bind(column_id(holder.entity_id))
        .fetch_all(pool)
        .await?;

    let mut decoded = Vec::with_capacity(rows.len());
    for row in &rows {
        match decode_row(holder, row) {
            Ok(row) => decoded.push(row),
            Err(Some(_)) => record_load_skipped(LOAD_SKIP_REASON_MALFORMED_ROW),
            Err(None) => {}
        }
    }
    Ok(decoded)
}

pub(crate) async fn execute_update(
    tx: &mut Transaction<'_, Postgres>,
    holder: &PermissionHolder,
    update: &DirtyUpdate,
) -> Result<(), sqlx::Error> {
    let key = RowKey::new(holder, update.channel_id, update.kind);
    let row = StoredRow::from_update(update);
    let query = match update.statement() {
        StatementKind::Delete => sqlx::query(DELETE_ROW_SQL),
        StatementKind::Insert => sqlx::query(INSERT_ROW_SQL),
        StatementKind::Update => sqlx::query(UPDATE_ROW_SQL),
    };
    let query = query
        .bind(key.server_id)
        .bind(key.holder_type)
        .bind(key.entity_id)
        .bind(key.channel_id)
        .bind(key.perm_id);
    let query = match update.statement() {
        StatementKind::Delete => query,
        StatementKind::Insert => query
            .bind(row.value)
            .bind(row.grant)
            .bind(row.flag_skip)
            .bind(row.flag_negate),
        StatementKind::Update => query
            .bind(row.value)
            .bind(row.grant)
            .bind(row.flag_skip)
            .bind(row.flag_negate)
            .bind(update.update_value != UpdateAction::DoNothing)
            .bind(update.update_grant != UpdateAction::DoNothing),
    };
    query.execute(&mut **tx).await?;
    Ok(())
}

pub(crate) async fn delete_holder_rows(
    pool: &PgPool,
    holder: &PermissionHolder,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(DELETE_HOLDER_ROWS_SQL)
        .bind(column_id(holder.server_id.get()))
        .bind(holder.kind.sql_type())
        .bind(column_id(holder.entity_id))
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use parley_core::{
        ChannelId, ClientDbId, DirtyUpdate, FlaggedValue, PermissionHolder, PermissionKind,
        ServerId, UpdateAction,
    };

    use super::{hydrated_row, RowKey, StoredRow};

    fn holder() -> PermissionHolder {
        PermissionHolder::client(ServerId(1), ClientDbId(9))
    }

    #[test]
    fn legacy_not_granted_values_hydrate_as_unset() {
        let row = StoredRow {
            value: Some(-2),
            grant: Some(40),
            flag_skip: false,
            flag_negate: true,
        };
        let hydrated = hydrated_row(&holder(), 0, "i_channel_join_power", row).unwrap();
        assert_eq!(hydrated.kind, PermissionKind::I_CHANNEL_JOIN_POWER);
        assert_eq!(hydrated.channel_id, None);
        assert_eq!(hydrated.record.value, None);
        assert_eq!(hydrated.record.grant, Some(40));
        assert!(hydrated.record.negate);
    }

    #[test]
    fn unknown_and_grant_names_are_skipped() {
        let row = StoredRow {
            value: Some(1),
            grant: None,
            flag_skip: false,
            flag_negate: false,
        };
        assert!(hydrated_row(&holder(), 0, "b_not_a_permission", row).is_none());
        assert!(
            hydrated_row(&holder(), 0, "i_needed_modify_power_channel_join_power", row).is_none()
        );
        assert_eq!(
            hydrated_row(&holder(), 12, "i_channel_join_power", row)
                .unwrap()
                .channel_id,
            Some(ChannelId(12))
        );
    }

    #[test]
    fn update_merge_keeps_untouched_facets() {
        let mut stored = StoredRow {
            value: Some(10),
            grant: Some(20),
            flag_skip: false,
            flag_negate: false,
        };
        stored.merge(&DirtyUpdate {
            kind: PermissionKind::I_CHANNEL_JOIN_POWER,
            channel_id: None,
            value: FlaggedValue::unset(),
            grant: FlaggedValue::new(99),
            update_value: UpdateAction::DeleteValue,
            update_grant: UpdateAction::DoNothing,
            skip: true,
            negate: false,
            has_db_row: true,
            is_delete: false,
        });
        assert_eq!(stored.value, None);
        assert_eq!(stored.grant, Some(20));
        assert!(stored.flag_skip);
    }

    #[test]
    fn row_key_uses_zero_for_holder_wide_entries() {
        let key = RowKey::new(&holder(), None, PermissionKind::I_CHANNEL_JOIN_POWER);
        assert_eq!(key.channel_id, 0);
        assert_eq!(key.holder_type, 2);
        assert_eq!(key.perm_id, "i_channel_join_power");
    }
}
