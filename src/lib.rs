pub mod api;
pub mod config;
pub mod display;
pub mod engine;
pub mod input;
pub mod notify;
pub mod state;
pub mod types;

/// Grow A Garden inventory API base URL (public, no auth required)
pub const API_BASE: &str = "https://gagapi.onrender.com";

/// User-agent sent with every inventory request
pub const USER_AGENT: &str = "GAGBot/1.0 (Rust Client)";

/// Only webhook URLs under this prefix are accepted
pub const WEBHOOK_PREFIX: &str = "https://discord.com/api/webhooks/";

/// Default watchlist file, one item name per line
pub const WATCHLIST_PATH: &str = "watchlist.txt";

/// Default webhook-URL file
pub const WEBHOOK_PATH: &str = "discord_webhook.txt";
