use std::{collections::HashMap, fmt::Write as _};

use super::core::{MetricsState, METRICS_STATE};

pub(crate) const LOAD_SKIP_REASON_UNKNOWN_PERMISSION: &str = "unknown_permission";
pub(crate) const LOAD_SKIP_REASON_MALFORMED_ROW: &str = "malformed_row";

pub(crate) fn metrics_state() -> &'static MetricsState {
    METRICS_STATE.get_or_init(MetricsState::default)
}

pub(crate) fn render_metrics() -> String {
    let flush_rows = metrics_state()
        .flush_rows
        .lock()
        .map_or_else(|_| HashMap::new(), |guard| guard.clone());
    let flush_failures = metrics_state()
        .flush_failures
        .lock()
        .map_or_else(|_| HashMap::new(), |guard| guard.clone());
    let load_skipped = metrics_state()
        .load_skipped
        .lock()
        .map_or_else(|_| HashMap::new(), |guard| guard.clone());
    let cache_evictions = metrics_state()
        .client_cache_evictions
        .lock()
        .map_or(0, |guard| *guard);

    let mut output = String::new();
    output.push_str(
        "# HELP parley_permission_flush_rows_total \
         Count of flushed permission rows by holder and statement\n",
    );
    output.push_str("# TYPE parley_permission_flush_rows_total counter\n");
    let mut row_entries: Vec<_> = flush_rows.into_iter().collect();
    row_entries.sort_by_key(|((holder, action), _)| (*holder, *action));
    for ((holder, action), value) in row_entries {
        let _ = writeln!(
            output,
            "parley_permission_flush_rows_total{{holder=\"{holder}\",action=\"{action}\"}} {value}"
        );
    }

    output.push_str(
        "# HELP parley_permission_flush_failures_total \
         Count of permission store flushes that failed by holder\n",
    );
    output.push_str("# TYPE parley_permission_flush_failures_total counter\n");
    let mut failure_entries: Vec<_> = flush_failures.into_iter().collect();
    failure_entries.sort_by_key(|(holder, _)| *holder);
    for (holder, value) in failure_entries {
        let _ = writeln!(
            output,
            "parley_permission_flush_failures_total{{holder=\"{holder}\"}} {value}"
        );
    }

    output.push_str(
        "# HELP parley_permission_load_skipped_total \
         Count of stored permission rows skipped during hydration by reason\n",
    );
    output.push_str("# TYPE parley_permission_load_skipped_total counter\n");
    let mut skipped_entries: Vec<_> = load_skipped.into_iter().collect();
    skipped_entries.sort_by_key(|(reason, _)| *reason);
    for (reason, value) in skipped_entries {
        let _ = writeln!(
            output,
            "parley_permission_load_skipped_total{{reason=\"{reason}\"}} {value}"
        );
    }

    output.push_str(
        "# HELP parley_client_cache_evictions_total \
         Count of cached client and playlist permission stores released after idling\n",
    );
    output.push_str("# TYPE parley_client_cache_evictions_total counter\n");
    let _ = writeln!(output, "parley_client_cache_evictions_total {cache_evictions}");

    output
}

pub(crate) fn record_flush_rows(holder: &'static str, action: &'static str, rows: u64) {
    if rows == 0 {
        return;
    }
    if let Ok(mut counters) = metrics_state().flush_rows.lock() {
        let entry = counters.entry((holder, action)).or_insert(0);
        *entry += rows;
    }
}

pub(crate) fn record_flush_failure(holder: &'static str) {
    if let Ok(mut counters) = metrics_state().flush_failures.lock() {
        let entry = counters.entry(holder).or_insert(0);
        *entry += 1;
    }
}

pub(crate) fn record_load_skipped(reason: &'static str) {
    if let Ok(mut counters) = metrics_state().load_skipped.lock() {
        let entry = counters.entry(reason).or_insert(0);
        *entry += 1;
    }
}

pub(crate) fn record_client_cache_evictions(count: u64) {
    if let Ok(mut counter) = metrics_state().client_cache_evictions.lock() {
        *counter += count;
    }
}

#[cfg(test)]
mod tests {
    use super::{
        metrics_state, record_flush_rows, record_load_skipped, render_metrics,
        LOAD_SKIP_REASON_MALFORMED_ROW,
    };

    #[test]
    fn records_flush_rows_per_holder_and_action() {
        let before = metrics_state()
            .flush_rows
            .lock()
            .expect("flush metrics mutex should not be poisoned")
            .get(&("playlist", "delete"))
            .copied()
            .unwrap_or(0);
        record_flush_rows("playlist", "delete", 3);
        record_flush_rows("playlist", "delete", 0);

        let rows = metrics_state()
            .flush_rows
            .lock()
            .expect("flush metrics mutex should not be poisoned");
        assert_eq!(rows.get(&("playlist", "delete")).copied(), Some(before + 3));
    }

    #[test]
    fn rendered_metrics_carry_prometheus_headers() {
        record_load_skipped(LOAD_SKIP_REASON_MALFORMED_ROW);
        let rendered = render_metrics();
        assert!(rendered.contains("# TYPE parley_permission_flush_rows_total counter"));
        assert!(
            rendered.contains("parley_permission_load_skipped_total{reason=\"malformed_row\"}")
        );
        assert!(rendered.contains("parley_client_cache_evictions_total "));
    }
}
