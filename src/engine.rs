use std::collections::HashMap;

use crate::state::WatchState;
use crate::types::{Category, Snapshot, StockAlert};

/// Build a lookup of lower-cased item name → (quantity, category) across
/// the whole snapshot. When the same name appears in more than one
/// category, the first occurrence in fetch order wins.
pub fn index_stock(snapshot: &Snapshot) -> HashMap<String, (u32, Category)> {
    let mut index = HashMap::new();
    for entry in &snapshot.entries {
        for item in &entry.items {
            index
                .entry(item.name.to_lowercase())
                .or_insert((item.quantity, entry.category));
        }
    }
    index
}

/// Run one detection pass over a fresh snapshot.
///
/// For every watched name (case-insensitive): look up the current quantity,
/// emit an alert when it is positive — every cycle, not only on the
/// transition into stock — and record the observation. Absent items are
/// recorded as quantity 0, so after a pass the observation state always
/// carries exactly the watchlist's keys. Alerts come out in watchlist
/// order.
pub fn detect(
    snapshot: &Snapshot,
    watchlist: &[String],
    state: &mut WatchState,
) -> Vec<StockAlert> {
    let index = index_stock(snapshot);
    let mut alerts = Vec::new();

    for name in watchlist {
        let key = name.to_lowercase();
        let (quantity, category) = match index.get(&key) {
            Some(&(quantity, category)) => (quantity, Some(category)),
            None => (0, None),
        };
        let previous = state.previous(&key);

        if quantity > 0 {
            alerts.push(StockAlert {
                name: name.clone(),
                category,
                quantity,
                previous,
            });
        }

        state.record(key, quantity);
    }

    alerts
}
