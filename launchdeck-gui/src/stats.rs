//! Activity statistics for the dashboard, fetched once per workspace
//! context.

use launchdeck_client::Backend;
use launchdeck_core::ActivityStats;

#[derive(Default)]
pub struct StatsView {
    stats: Option<ActivityStats>,
    fetched_version: Option<u64>,
}

impl StatsView {
    pub fn stats(&self) -> Option<&ActivityStats> {
        self.stats.as_ref()
    }

    /// Fetches stats for the given workspace version unless that version was
    /// already attempted. A failed fetch leaves `stats` empty until the next
    /// context change or explicit invalidation.
    pub fn ensure_loaded(&mut self, backend: &dyn Backend, version: u64) {
        if self.fetched_version == Some(version) {
            return;
        }
        self.fetched_version = Some(version);
        match backend.get_activity_stats(None) {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => {
                log::error!("failed to load activity stats: {err}");
                self.stats = None;
            }
        }
    }

    /// Drops cached stats so the next dashboard frame re-fetches them.
    pub fn invalidate(&mut self) {
        self.stats = None;
        self.fetched_version = None;
    }
}
