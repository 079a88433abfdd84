//! Periodic housekeeping: connection pool gauges and pruning of idle
//! rate limiter buckets.

use std::time::Duration;
use tokio::{sync::watch, task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, info};

use crate::app::AppState;

pub const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(10);

/// One pass of housekeeping.
pub fn run_once(state: &AppState) {
    persistence::metrics::record_pool_metrics(&state.pool);

    if let Some(limiter) = &state.rate_limiter {
        limiter.retain_recent();
        let tracked = limiter.tracked_clients();
        metrics::gauge!("rate_limiter_tracked_clients").set(tracked as f64);
        debug!(tracked_clients = tracked, "Rate limiter pruned");
    }
}

/// Runs [`run_once`] every [`MAINTENANCE_INTERVAL`] until `shutdown` flips
/// or its sender is dropped.
pub fn spawn_maintenance(state: AppState, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(MAINTENANCE_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = interval.tick() => run_once(&state),
                _ = shutdown.changed() => break,
            }
        }

        info!("Maintenance task stopped");
    })
}
