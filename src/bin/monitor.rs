use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use gag_stock_monitor::api::InventoryClient;
use gag_stock_monitor::config::{load_watchlist, load_webhook_url};
use gag_stock_monitor::display::{self, RenderStatus};
use gag_stock_monitor::engine;
use gag_stock_monitor::input::{self, Command};
use gag_stock_monitor::notify::Notifier;
use gag_stock_monitor::state::WatchState;
use gag_stock_monitor::types::WebhookUrl;
use gag_stock_monitor::{API_BASE, WATCHLIST_PATH, WEBHOOK_PATH};

/// Countdown granularity while auto-refresh waits, so quit and refresh
/// commands are honored within a second.
const WAIT_TICK: Duration = Duration::from_secs(1);

/// Flat delay before re-entering the loop after an unexpected cycle error.
const RETRY_DELAY: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "gag-monitor", about = "Grow A Garden inventory stock monitor")]
struct Args {
    /// Watchlist file, one item name per line
    #[arg(long, default_value = WATCHLIST_PATH)]
    watchlist: PathBuf,

    /// File holding the notification webhook URL
    #[arg(long, default_value = WEBHOOK_PATH)]
    webhook_file: PathBuf,

    /// Auto-refresh interval in seconds
    #[arg(long, default_value_t = 60)]
    interval: u64,

    /// Inventory API base URL
    #[arg(long, default_value = API_BASE)]
    base_url: String,

    /// Start with auto-refresh enabled
    #[arg(long)]
    auto: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.interval == 0 {
        anyhow::bail!("--interval must be positive");
    }

    info!("Starting stock monitor — api={} interval={}s", args.base_url, args.interval);

    let watchlist = load_watchlist(&args.watchlist);
    let webhook = load_webhook_url(&args.webhook_file);
    let client = InventoryClient::new(args.base_url)?;
    let notifier = Notifier::new(webhook.map(WebhookUrl::into_url));

    println!("Controls: 'm' toggles auto-refresh, 'r' or Enter refreshes now, 'q' quits.");

    let mut rx = input::spawn_stdin_listener();
    let mut state = WatchState::new();
    let mut auto_refresh = args.auto;
    let interval = Duration::from_secs(args.interval);

    'run: loop {
        if let Err(e) = run_cycle(
            &client,
            &notifier,
            &watchlist,
            &mut state,
            auto_refresh,
            interval,
        )
        .await
        {
            warn!(
                "Cycle failed: {e:#}. Retrying in {}s...",
                RETRY_DELAY.as_secs()
            );
            tokio::time::sleep(RETRY_DELAY).await;
            continue;
        }

        if auto_refresh {
            // Wait out the interval in one-second ticks, draining commands
            // between ticks so quit is honored promptly.
            let next_refresh = Instant::now() + interval;
            while Instant::now() < next_refresh {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutdown signal received");
                        break 'run;
                    }
                    line = rx.recv() => {
                        match line {
                            None => {
                                info!("Input closed");
                                break 'run;
                            }
                            Some(line) => match input::parse_command(&line, auto_refresh) {
                                Some(Command::Quit) => break 'run,
                                Some(Command::Refresh) => {
                                    info!("Manual refresh triggered");
                                    break;
                                }
                                Some(Command::ToggleAuto) => {
                                    auto_refresh = false;
                                    info!("Auto-refresh disabled");
                                    break;
                                }
                                Some(Command::EnableAuto) | None => {}
                            },
                        }
                    }
                    _ = tokio::time::sleep(WAIT_TICK) => {}
                }
            }
        } else {
            println!();
            println!("Options: press Enter to refresh, 'r' to enable auto-refresh, 'q' to quit.");
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutdown signal received");
                        break 'run;
                    }
                    line = rx.recv() => {
                        match line {
                            None => {
                                info!("Input closed");
                                break 'run;
                            }
                            Some(line) => match input::parse_command(&line, auto_refresh) {
                                Some(Command::Quit) => break 'run,
                                Some(Command::EnableAuto) => {
                                    auto_refresh = true;
                                    info!(
                                        "Auto-refresh enabled — refreshing every {}s",
                                        interval.as_secs()
                                    );
                                    break;
                                }
                                Some(Command::Refresh) => break,
                                Some(Command::ToggleAuto) | None => break,
                            },
                        }
                    }
                }
            }
        }
    }

    info!("Stopped — {}", state.summary());
    Ok(())
}

/// One full cycle: fetch all categories, detect stock changes, notify, and
/// display the report. Fetch and notification failures are handled inside
/// their components; an error here is the unexpected kind the caller
/// retries after a flat delay.
async fn run_cycle(
    client: &InventoryClient,
    notifier: &Notifier,
    watchlist: &[String],
    state: &mut WatchState,
    auto_refresh: bool,
    interval: Duration,
) -> Result<()> {
    let snapshot = client.fetch_all().await;
    let alerts = engine::detect(&snapshot, watchlist, state);

    for alert in &alerts {
        info!(
            "ALERT: {} is in stock ({} available in {})",
            alert.name,
            alert.quantity,
            alert.category_label()
        );
        notifier.send(alert).await;
    }

    state.cycles += 1;
    state.alerts += alerts.len() as u64;

    let status = RenderStatus {
        auto_refresh,
        remaining_secs: interval.as_secs(),
        webhook_enabled: notifier.enabled(),
    };
    println!("{}", display::render(&snapshot, watchlist, &status, state));

    Ok(())
}
