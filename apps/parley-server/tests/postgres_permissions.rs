use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

use parley_core::{
    ChannelId, ClientDbId, PermissionHolder, PermissionKind, PermissionUpdate, ServerId,
};
use parley_server::{flush_all, AppConfig, AppState};

const JOIN: PermissionKind = PermissionKind::I_CHANNEL_JOIN_POWER;
const VIEW: PermissionKind = PermissionKind::I_CHANNEL_VIEW_POWER;

fn postgres_url() -> Option<String> {
    env::var("PARLEY_TEST_DATABASE_URL").ok()
}

fn test_state(database_url: String) -> AppState {
    AppState::new(&AppConfig {
        database_url: Some(database_url),
        ..AppConfig::default()
    })
    .expect("state should build")
}

fn unique_client() -> ClientDbId {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after the epoch")
        .as_nanos();
    ClientDbId(u64::try_from(nanos % 1_000_000_000_000).expect("value fits in u64"))
}

#[tokio::test]
async fn postgres_client_permissions_survive_restart() {
    let Some(database_url) = postgres_url() else {
        eprintln!("skipping postgres test: PARLEY_TEST_DATABASE_URL unset");
        return;
    };
    let server_id = ServerId(9_001);
    let client_id = unique_client();

    let state = test_state(database_url.clone());
    let store = state
        .client_permissions(server_id, client_id)
        .await
        .expect("client store should load");
    store
        .set_permission(JOIN, PermissionUpdate::set(40, 60).with_negate(true))
        .expect("dense permission should be writable");
    store
        .set_channel_permission(VIEW, ChannelId(3), PermissionUpdate::set_value(12))
        .expect("dense permission should be writable");
    let report = flush_all(&state).await;
    assert_eq!(report.failed, 0);
    assert_eq!(report.rows, 2);

    let restarted = test_state(database_url.clone());
    let reloaded = restarted
        .gateway
        .load_client_permissions(server_id, client_id)
        .await
        .expect("client store should reload");
    let join = reloaded.container(JOIN);
    assert_eq!(join.value().as_option(), Some(40));
    assert_eq!(join.grant().as_option(), Some(60));
    assert!(join.flags.negate());
    assert_eq!(
        reloaded
            .channel_permission(VIEW, ChannelId(3))
            .value()
            .as_option(),
        Some(12)
    );

    store
        .set_permission(JOIN, PermissionUpdate::delete_value())
        .expect("dense permission should be writable");
    store
        .set_channel_permission(VIEW, ChannelId(3), PermissionUpdate::delete_all())
        .expect("dense permission should be writable");
    let summary = state
        .gateway
        .save_client_permissions(server_id, client_id, &store)
        .await
        .expect("second flush should succeed");
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.deleted, 1);

    let reloaded = restarted
        .gateway
        .load_client_permissions(server_id, client_id)
        .await
        .expect("client store should reload");
    assert!(!reloaded.container(JOIN).value().has_value);
    assert_eq!(reloaded.container(JOIN).grant().as_option(), Some(60));
    assert!(reloaded.channel_permissions_all().is_empty());

    let removed = restarted
        .gateway
        .delete_holder_permissions(&PermissionHolder::client(server_id, client_id))
        .await
        .expect("holder delete should succeed");
    assert_eq!(removed, 1);
}
