use std::{collections::BTreeMap, sync::Arc};

use parley_core::{
    ChannelId, ClientDbId, DirtyUpdate, GroupId, PermissionHolder, PermissionStore, PlaylistId,
    ServerId, StatementKind,
};
use sqlx::PgPool;
use tokio::sync::{OnceCell, RwLock};

use super::{
    db::{
        delete_holder_rows, ensure_db_schema, execute_update, hydrated_row, select_holder_rows,
        HydratedRow, RowKey, StoredRow,
    },
    errors::PersistenceFailure,
    metrics::{record_flush_failure, record_flush_rows},
};

/// Holder kinds as stored in the `type` column.
pub use parley_core::HolderKind as PermissionTarget;

/// Row counts written by one `save_permissions` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub inserted: u64,
    pub updated: u64,
    pub deleted: u64,
}

impl FlushSummary {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.inserted + self.updated + self.deleted
    }

    fn count(&mut self, statement: StatementKind) {
        match statement {
            StatementKind::Insert => self.inserted += 1,
            StatementKind::Update => self.updated += 1,
            StatementKind::Delete => self.deleted += 1,
        }
    }

    fn record(&self, holder: &PermissionHolder) {
        let label = holder.kind.as_str();
        record_flush_rows(label, StatementKind::Insert.as_str(), self.inserted);
        record_flush_rows(label, StatementKind::Update.as_str(), self.updated);
        record_flush_rows(label, StatementKind::Delete.as_str(), self.deleted);
    }
}

type MemoryRows = BTreeMap<RowKey, StoredRow>;

#[derive(Clone)]
enum Backend {
    Postgres {
        pool: PgPool,
        schema: Arc<OnceCell<()>>,
    },
    Memory(Arc<RwLock<MemoryRows>>),
}

/// Loads and saves permission stores, one holder at a time.
#[derive(Clone)]
pub struct PersistenceGateway {
    backend: Backend,
}

impl std::fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backend = match self.backend {
            Backend::Postgres { .. } => "postgres",
            Backend::Memory(_) => "memory",
        };
        f.debug_struct("PersistenceGateway")
            .field("backend", &backend)
            .finish()
    }
}

impl PersistenceGateway {
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            backend: Backend::Postgres {
                pool,
                schema: Arc::new(OnceCell::new()),
            },
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    async fn rows_of(
        &self,
        holder: &PermissionHolder,
    ) -> Result<Vec<HydratedRow>, PersistenceFailure> {
        match &self.backend {
            Backend::Postgres { pool, schema } => {
                ensure_db_schema(pool, schema).await?;
                Ok(select_holder_rows(pool, holder).await?)
            }
            Backend::Memory(rows) => {
                let wanted = RowKey::new(holder, None, parley_core::PermissionKind::UNKNOWN);
                let rows = rows.read().await;
                Ok(rows
                    .iter()
                    .filter(|(key, _)| same_holder(key, &wanted))
                    .filter_map(|(key, row)| {
                        hydrated_row(holder, key.channel_id, &key.perm_id, *row)
                    })
                    .collect())
            }
        }
    }

    /// Loads the stored rows of `holder` into `store`, returning how many were applied.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot be read.
    pub async fn hydrate(
        &self,
        holder: &PermissionHolder,
        store: &PermissionStore,
    ) -> Result<usize, PersistenceFailure> {
        let rows = self.rows_of(holder).await?;
        for row in &rows {
            match row.channel_id {
                Some(channel_id) => store.load_channel_permission(row.kind, channel_id, row.record),
                None => store.load_permission(row.kind, row.record),
            }
        }
        tracing::debug!(%holder, rows = rows.len(), "permissions hydrated");
        Ok(rows.len())
    }

    /// Builds a fresh store holding the stored rows of `holder`.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot be read.
    pub async fn load_permissions(
        &self,
        holder: &PermissionHolder,
    ) -> Result<PermissionStore, PersistenceFailure> {
        let store = PermissionStore::new();
        self.hydrate(holder, &store).await?;
        Ok(store)
    }

    /// Writes every pending edit of `store` in one transaction.
    ///
    /// The store's pending markers are consumed before any I/O; on failure the
    /// edits stay in memory and are not retried.
    ///
    /// # Errors
    /// Returns an error when the transaction fails.
    pub async fn save_permissions(
        &self,
        holder: &PermissionHolder,
        store: &PermissionStore,
    ) -> Result<FlushSummary, PersistenceFailure> {
        let updates = store.flush_db_updates();
        if updates.is_empty() {
            return Ok(FlushSummary::default());
        }

        let result = match &self.backend {
            Backend::Postgres { pool, schema } => {
                Self::write_postgres(pool, schema, holder, &updates).await
            }
            Backend::Memory(rows) => {
                Ok(Self::write_memory(&mut *rows.write().await, holder, &updates))
            }
        };

        match result {
            Ok(summary) => {
                summary.record(holder);
                tracing::debug!(
                    %holder,
                    inserted = summary.inserted,
                    updated = summary.updated,
                    deleted = summary.deleted,
                    "permissions flushed"
                );
                Ok(summary)
            }
            Err(error) => {
                record_flush_failure(holder.kind.as_str());
                tracing::error!(
                    %holder,
                    rows = updates.len(),
                    reason = error.reason(),
                    %error,
                    "permission flush failed"
                );
                Err(error)
            }
        }
    }

    async fn write_postgres(
        pool: &PgPool,
        schema: &OnceCell<()>,
        holder: &PermissionHolder,
        updates: &[DirtyUpdate],
    ) -> Result<FlushSummary, PersistenceFailure> {
        ensure_db_schema(pool, schema).await?;
        let mut tx = pool.begin().await?;
        let mut summary = FlushSummary::default();
        for update in updates {
            execute_update(&mut tx, holder, update).await?;
            summary.count(update.statement());
        }
        tx.commit().await?;
        Ok(summary)
    }

    fn write_memory(
        rows: &mut MemoryRows,
        holder: &PermissionHolder,
        updates: &[DirtyUpdate],
    ) -> FlushSummary {
        let mut summary = FlushSummary::default();
        for update in updates {
            let key = RowKey::new(holder, update.channel_id, update.kind);
            match update.statement() {
                StatementKind::Insert => {
                    rows.insert(key, StoredRow::from_update(update));
                }
                StatementKind::Update => {
                    if let Some(row) = rows.get_mut(&key) {
                        row.merge(update);
                    }
                }
                StatementKind::Delete => {
                    rows.remove(&key);
                }
            }
            summary.count(update.statement());
        }
        summary
    }

    /// Removes every stored row of a deleted holder.
    ///
    /// # Errors
    /// Returns an error when the delete fails.
    pub async fn delete_holder_permissions(
        &self,
        holder: &PermissionHolder,
    ) -> Result<u64, PersistenceFailure> {
        let removed = match &self.backend {
            Backend::Postgres { pool, schema } => {
                ensure_db_schema(pool, schema).await?;
                delete_holder_rows(pool, holder).await?
            }
            Backend::Memory(rows) => {
                let wanted = RowKey::new(holder, None, parley_core::PermissionKind::UNKNOWN);
                let mut rows = rows.write().await;
                let before = rows.len();
                rows.retain(|key, _| !same_holder(key, &wanted));
                (before - rows.len()) as u64
            }
        };
        tracing::info!(%holder, removed, "holder permissions deleted");
        Ok(removed)
    }

    /// # Errors
    /// Returns an error when the backing store cannot be read.
    pub async fn load_group_permissions(
        &self,
        server_id: ServerId,
        group_id: GroupId,
    ) -> Result<PermissionStore, PersistenceFailure> {
        self.load_permissions(&PermissionHolder::group(server_id, group_id))
            .await
    }

    /// # Errors
    /// Returns an error when the backing store cannot be read.
    pub async fn load_channel_permissions(
        &self,
        server_id: ServerId,
        channel_id: ChannelId,
    ) -> Result<PermissionStore, PersistenceFailure> {
        self.load_permissions(&PermissionHolder::channel(server_id, channel_id))
            .await
    }

    /// # Errors
    /// Returns an error when the backing store cannot be read.
    pub async fn load_client_permissions(
        &self,
        server_id: ServerId,
        client_id: ClientDbId,
    ) -> Result<PermissionStore, PersistenceFailure> {
        self.load_permissions(&PermissionHolder::client(server_id, client_id))
            .await
    }

    /// # Errors
    /// Returns an error when the backing store cannot be read.
    pub async fn load_playlist_permissions(
        &self,
        server_id: ServerId,
        playlist_id: PlaylistId,
    ) -> Result<PermissionStore, PersistenceFailure> {
        self.load_permissions(&PermissionHolder::playlist(server_id, playlist_id))
            .await
    }

    /// # Errors
    /// Returns an error when the transaction fails.
    pub async fn save_group_permissions(
        &self,
        server_id: ServerId,
        group_id: GroupId,
        store: &PermissionStore,
    ) -> Result<FlushSummary, PersistenceFailure> {
        self.save_permissions(&PermissionHolder::group(server_id, group_id), store)
            .await
    }

    /// # Errors
    /// Returns an error when the transaction fails.
    pub async fn save_channel_permissions(
        &self,
        server_id: ServerId,
        channel_id: ChannelId,
        store: &PermissionStore,
    ) -> Result<FlushSummary, PersistenceFailure> {
        self.save_permissions(&PermissionHolder::channel(server_id, channel_id), store)
            .await
    }

    /// # Errors
    /// Returns an error when the transaction fails.
    pub async fn save_client_permissions(
        &self,
        server_id: ServerId,
        client_id: ClientDbId,
        store: &PermissionStore,
    ) -> Result<FlushSummary, PersistenceFailure> {
        self.save_permissions(&PermissionHolder::client(server_id, client_id), store)
            .await
    }

    /// # Errors
    /// Returns an error when the transaction fails.
    pub async fn save_playlist_permissions(
        &self,
        server_id: ServerId,
        playlist_id: PlaylistId,
        store: &PermissionStore,
    ) -> Result<FlushSummary, PersistenceFailure> {
        self.save_permissions(&PermissionHolder::playlist(server_id, playlist_id), store)
            .await
    }
}

fn same_holder(key: &RowKey, wanted: &RowKey) -> bool {
    key.server_id == wanted.server_id
        && key.holder_type == wanted.holder_type
        && key.entity_id == wanted.entity_id
}

#[cfg(test)]
mod tests {
    use parley_core::{
        ChannelId, ClientDbId, PermissionHolder, PermissionKind, PermissionUpdate, ServerId,
    };

    use super::{FlushSummary, PersistenceGateway};

    const JOIN: PermissionKind = PermissionKind::I_CHANNEL_JOIN_POWER;
    const VIEW: PermissionKind = PermissionKind::I_CHANNEL_VIEW_POWER;

    #[tokio::test]
    async fn memory_backend_round_trips_values_and_overlays() {
        let gateway = PersistenceGateway::in_memory();
        let holder = PermissionHolder::client(ServerId(1), ClientDbId(5));
        let store = gateway.load_permissions(&holder).await.unwrap();
        store
            .set_permission(JOIN, PermissionUpdate::set(40, 60).with_skip(true))
            .unwrap();
        store
            .set_channel_permission(VIEW, ChannelId(3), PermissionUpdate::set_value(12))
            .unwrap();

        let summary = gateway.save_permissions(&holder, &store).await.unwrap();
        assert_eq!(
            summary,
            FlushSummary {
                inserted: 2,
                updated: 0,
                deleted: 0
            }
        );

        let reloaded = gateway.load_permissions(&holder).await.unwrap();
        let join = reloaded.container(JOIN);
        assert_eq!(join.value().as_option(), Some(40));
        assert_eq!(join.grant().as_option(), Some(60));
        assert!(join.flags.skip());
        assert!(!reloaded.require_db_updates());
        assert_eq!(
            reloaded
                .channel_permission(VIEW, ChannelId(3))
                .value()
                .as_option(),
            Some(12)
        );
    }

    #[tokio::test]
    async fn updates_keep_untouched_facets_and_deletes_remove_rows() {
        let gateway = PersistenceGateway::in_memory();
        let holder = PermissionHolder::client(ServerId(1), ClientDbId(6));
        let store = gateway.load_permissions(&holder).await.unwrap();
        store.set_permission(JOIN, PermissionUpdate::set(10, 20)).unwrap();
        gateway.save_permissions(&holder, &store).await.unwrap();

        store.set_permission(JOIN, PermissionUpdate::delete_value()).unwrap();
        let summary = gateway.save_permissions(&holder, &store).await.unwrap();
        assert_eq!(summary.updated, 1);
        let reloaded = gateway.load_permissions(&holder).await.unwrap();
        assert!(!reloaded.container(JOIN).value().has_value);
        assert_eq!(reloaded.container(JOIN).grant().as_option(), Some(20));

        store.set_permission(JOIN, PermissionUpdate::delete_all()).unwrap();
        let summary = gateway.save_permissions(&holder, &store).await.unwrap();
        assert_eq!(summary.deleted, 1);
        let reloaded = gateway.load_permissions(&holder).await.unwrap();
        assert!(reloaded.permissions().is_empty());
    }

    #[tokio::test]
    async fn clean_store_writes_nothing() {
        let gateway = PersistenceGateway::in_memory();
        let holder = PermissionHolder::client(ServerId(2), ClientDbId(1));
        let store = gateway.load_permissions(&holder).await.unwrap();
        assert_eq!(gateway.save_permissions(&holder, &store).await.unwrap().total(), 0);
    }

    #[tokio::test]
    async fn holder_delete_leaves_other_holders_alone() {
        let gateway = PersistenceGateway::in_memory();
        let doomed = PermissionHolder::client(ServerId(1), ClientDbId(7));
        let kept = PermissionHolder::client(ServerId(1), ClientDbId(8));
        for holder in [&doomed, &kept] {
            let store = gateway.load_permissions(holder).await.unwrap();
            store.set_permission(JOIN, PermissionUpdate::set_value(1)).unwrap();
            gateway.save_permissions(holder, &store).await.unwrap();
        }

        assert_eq!(gateway.delete_holder_permissions(&doomed).await.unwrap(), 1);
        assert!(gateway.load_permissions(&doomed).await.unwrap().permissions().is_empty());
        assert_eq!(gateway.load_permissions(&kept).await.unwrap().permissions().len(), 1);
    }
}
