use std::collections::HashSet;

use crate::state::WatchState;
use crate::types::Snapshot;

const RULE: &str = "============================================================";
const THIN_RULE: &str = "----------------------------------------";

/// Run-loop status projected into the report header.
#[derive(Debug, Clone, Copy)]
pub struct RenderStatus {
    pub auto_refresh: bool,
    pub remaining_secs: u64,
    pub webhook_enabled: bool,
}

/// Render the full inventory report for one cycle.
///
/// Pure projection of the fetched data: shows every category (not just the
/// watchlist), flags watched items, and closes with aggregate counts.
/// Mutates nothing.
pub fn render(
    snapshot: &Snapshot,
    watchlist: &[String],
    status: &RenderStatus,
    state: &WatchState,
) -> String {
    let watched: HashSet<String> = watchlist.iter().map(|n| n.to_lowercase()).collect();
    let mut out = String::new();

    out.push_str(RULE);
    out.push_str("\nGROW A GARDEN — INVENTORY REPORT\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Last updated: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    if status.auto_refresh {
        out.push_str(&format!(
            "Auto-refresh: enabled ({}s until next refresh)\n",
            status.remaining_secs
        ));
    } else {
        out.push_str("Auto-refresh: disabled\n");
    }

    if watchlist.is_empty() {
        out.push_str("Watching: (nothing)\n");
    } else {
        let entries: Vec<String> = watchlist
            .iter()
            .map(|name| format!("{name} (last seen {})", state.previous(&name.to_lowercase())))
            .collect();
        out.push_str(&format!("Watching: {}\n", entries.join(", ")));
    }

    out.push_str(if status.webhook_enabled {
        "Webhook notifications: enabled\n"
    } else {
        "Webhook notifications: disabled\n"
    });
    out.push_str(RULE);
    out.push('\n');

    let mut available_watched: Vec<String> = Vec::new();

    for entry in &snapshot.entries {
        if entry.items.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n{} ({} items)\n{THIN_RULE}\n",
            entry.category.label().to_uppercase(),
            entry.items.len()
        ));
        for item in &entry.items {
            let is_watched = watched.contains(&item.name.to_lowercase());
            let marker = if is_watched { "[*]" } else { "   " };
            out.push_str(&format!("{marker} {}: {}", item.name, item.quantity));
            if is_watched {
                if item.quantity > 0 {
                    out.push_str("  — IN STOCK");
                    available_watched.push(format!("{} ({})", item.name, entry.category.label()));
                } else {
                    out.push_str("  — OUT OF STOCK");
                }
            }
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Total items: {}\n", snapshot.total_items()));
    if available_watched.is_empty() {
        out.push_str("No watched items currently available\n");
    } else {
        out.push_str(&format!(
            "Watched items available: {}\n",
            available_watched.join(", ")
        ));
    }
    out.push_str(RULE);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, CategoryStock, ItemRecord};

    fn make_snapshot() -> Snapshot {
        Snapshot {
            entries: vec![
                CategoryStock {
                    category: Category::Seeds,
                    items: vec![
                        ItemRecord {
                            name: "Carrot".to_string(),
                            quantity: 5,
                        },
                        ItemRecord {
                            name: "Sunflower".to_string(),
                            quantity: 0,
                        },
                    ],
                },
                CategoryStock {
                    category: Category::Gear,
                    items: vec![],
                },
            ],
        }
    }

    fn status(auto: bool) -> RenderStatus {
        RenderStatus {
            auto_refresh: auto,
            remaining_secs: 60,
            webhook_enabled: false,
        }
    }

    #[test]
    fn report_lists_categories_and_counts() {
        let report = render(&make_snapshot(), &[], &status(false), &WatchState::new());
        assert!(report.contains("SEEDS (2 items)"));
        assert!(report.contains("Total items: 2"));
        // Empty categories are skipped
        assert!(!report.contains("GEAR"));
    }

    #[test]
    fn report_flags_watched_items() {
        let watchlist = vec!["carrot".to_string(), "Sunflower".to_string()];
        let report = render(
            &make_snapshot(),
            &watchlist,
            &status(false),
            &WatchState::new(),
        );
        assert!(report.contains("[*] Carrot: 5  — IN STOCK"));
        assert!(report.contains("[*] Sunflower: 0  — OUT OF STOCK"));
        assert!(report.contains("Watched items available: Carrot (Seeds)"));
    }

    #[test]
    fn report_no_watched_available() {
        let watchlist = vec!["Sunflower".to_string()];
        let report = render(
            &make_snapshot(),
            &watchlist,
            &status(false),
            &WatchState::new(),
        );
        assert!(report.contains("No watched items currently available"));
    }

    #[test]
    fn report_shows_refresh_mode() {
        let auto = render(&make_snapshot(), &[], &status(true), &WatchState::new());
        assert!(auto.contains("Auto-refresh: enabled (60s until next refresh)"));

        let manual = render(&make_snapshot(), &[], &status(false), &WatchState::new());
        assert!(manual.contains("Auto-refresh: disabled"));
    }

    #[test]
    fn report_shows_last_seen_quantities() {
        let mut state = WatchState::new();
        state.record("carrot".to_string(), 5);
        let watchlist = vec!["Carrot".to_string()];
        let report = render(&make_snapshot(), &watchlist, &status(false), &state);
        assert!(report.contains("Watching: Carrot (last seen 5)"));
    }

    #[test]
    fn report_shows_webhook_state() {
        let mut with_webhook = status(false);
        with_webhook.webhook_enabled = true;
        let report = render(&make_snapshot(), &[], &with_webhook, &WatchState::new());
        assert!(report.contains("Webhook notifications: enabled"));
    }
}
