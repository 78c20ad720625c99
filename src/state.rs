use std::collections::HashMap;

/// Cross-cycle observation state: last-seen quantity per watched item,
/// keyed by lower-cased name, plus running totals for the shutdown summary.
///
/// This is the only data that survives a cycle. After every detection pass
/// its key set matches the watchlist exactly.
#[derive(Debug, Default)]
pub struct WatchState {
    pub last_seen: HashMap<String, u32>,
    pub cycles: u64,
    pub alerts: u64,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last observed quantity for a (lower-cased) watched name, 0 if unseen.
    pub fn previous(&self, name_lower: &str) -> u32 {
        self.last_seen.get(name_lower).copied().unwrap_or(0)
    }

    /// Record the quantity observed this cycle.
    pub fn record(&mut self, name_lower: String, quantity: u32) {
        self.last_seen.insert(name_lower, quantity);
    }

    /// One-line run summary for the shutdown log.
    pub fn summary(&self) -> String {
        format!(
            "{} cycle(s) completed, {} alert(s) emitted, {} item(s) tracked",
            self.cycles,
            self.alerts,
            self.last_seen.len()
        )
    }
}
