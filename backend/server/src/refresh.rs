use std::sync::Arc;

use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::state::State;

/// Reloads the catalog every `refresh_interval`. Each tick is an independent load cycle.
pub async fn refresh_loop(state: Arc<State>) {
    let period = state.config.refresh_interval;
    info!("Reloading catalog every {}s", period.as_secs());

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // first tick completes immediately and the initial load already ran
    ticker.tick().await;

    loop {
        ticker.tick().await;

        if let Ok(count) = state.reload().await {
            debug!("Scheduled reload published {count} games");
        }
    }
}
