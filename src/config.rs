use std::path::Path;

use tracing::{info, warn};

use crate::types::WebhookUrl;

/// Load the watchlist: one item name per non-empty, non-`#` line.
///
/// Order is preserved and duplicates are kept. A missing or unreadable
/// file is not fatal; monitoring simply runs with an empty watchlist.
pub fn load_watchlist(path: &Path) -> Vec<String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                "Could not read watchlist {}: {e}. No items will be monitored.",
                path.display()
            );
            return Vec::new();
        }
    };

    let watchlist: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if watchlist.is_empty() {
        warn!("Watchlist {} contains no entries", path.display());
    } else {
        info!(
            "Loaded {} item(s) to watch: {}",
            watchlist.len(),
            watchlist.join(", ")
        );
    }
    watchlist
}

/// Load the notification endpoint: the first line that parses as a valid
/// webhook URL wins. Returns `None` (notifications disabled) if the file is
/// missing or holds no valid URL.
pub fn load_webhook_url(path: &Path) -> Option<WebhookUrl> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                "Could not read webhook file {}: {e}. Notifications disabled.",
                path.display()
            );
            return None;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match WebhookUrl::parse(line) {
            Ok(url) => {
                info!("Webhook endpoint loaded from {}", path.display());
                return Some(url);
            }
            Err(e) => warn!("Skipping invalid webhook line in {}: {e}", path.display()),
        }
    }

    warn!(
        "No valid webhook URL in {}. Notifications disabled.",
        path.display()
    );
    None
}
