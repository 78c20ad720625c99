use std::time::Duration;

use chrono::Utc;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::{info, warn};
use url::Url;

use crate::types::StockAlert;

/// Embed accent color for in-stock alerts (green).
const EMBED_COLOR: u32 = 0x00ff00;

/// Webhook delivery timeout.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatches stock alerts to the configured webhook endpoint.
///
/// Endpoint validation happens at config load; the notifier only handles
/// transport. With no endpoint configured every send is a no-op.
pub struct Notifier {
    http: reqwest::Client,
    endpoint: Option<Url>,
}

impl Notifier {
    pub fn new(endpoint: Option<Url>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http, endpoint }
    }

    pub fn enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Post one alert to the webhook. HTTP 204 is the success signal;
    /// any other status or a transport error is logged and dropped —
    /// delivery failures never stall or abort the cycle.
    pub async fn send(&self, alert: &StockAlert) {
        let Some(endpoint) = &self.endpoint else {
            return;
        };
        let payload = build_payload(alert);
        match self.http.post(endpoint.clone()).json(&payload).send().await {
            Ok(response) if response.status() == StatusCode::NO_CONTENT => {
                info!(
                    "Webhook notification sent for {} ({})",
                    alert.name,
                    alert.category_label()
                );
            }
            Ok(response) => {
                warn!(
                    "Webhook returned HTTP {} for {}",
                    response.status(),
                    alert.name
                );
            }
            Err(e) => warn!("Webhook delivery failed for {}: {e}", alert.name),
        }
    }
}

/// Build the webhook body: a single-element embeds envelope carrying the
/// item, category, and the current/previous quantities.
pub fn build_payload(alert: &StockAlert) -> Value {
    json!({
        "embeds": [{
            "title": "Item Stock Alert",
            "description": format!("**{}** is now in stock!", alert.name),
            "color": EMBED_COLOR,
            "fields": [
                {
                    "name": "Category",
                    "value": format!("**{}**", alert.category_label()),
                    "inline": true
                },
                {
                    "name": "Current Stock",
                    "value": format!("**{}** available", alert.quantity),
                    "inline": true
                },
                {
                    "name": "Previous Stock",
                    "value": format!("**{}** available", alert.previous),
                    "inline": true
                }
            ],
            "timestamp": Utc::now().to_rfc3339(),
            "footer": { "text": "GAG Stock Monitor" }
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn make_alert() -> StockAlert {
        StockAlert {
            name: "Sunflower".to_string(),
            category: Some(Category::Seeds),
            quantity: 3,
            previous: 1,
        }
    }

    #[test]
    fn payload_is_single_embed_envelope() {
        let payload = build_payload(&make_alert());
        let embeds = payload["embeds"].as_array().expect("embeds array");
        assert_eq!(embeds.len(), 1);

        let embed = &embeds[0];
        assert_eq!(embed["title"], "Item Stock Alert");
        assert_eq!(embed["description"], "**Sunflower** is now in stock!");
        assert_eq!(embed["color"], 0x00ff00);
        assert_eq!(embed["footer"]["text"], "GAG Stock Monitor");
        assert!(embed["timestamp"].is_string());
    }

    #[test]
    fn payload_fields_carry_quantities() {
        let payload = build_payload(&make_alert());
        let fields = payload["embeds"][0]["fields"].as_array().expect("fields");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0]["name"], "Category");
        assert_eq!(fields[0]["value"], "**Seeds**");
        assert_eq!(fields[1]["value"], "**3** available");
        assert_eq!(fields[2]["value"], "**1** available");
        assert!(fields.iter().all(|f| f["inline"] == true));
    }

    #[test]
    fn payload_unknown_category() {
        let alert = StockAlert {
            category: None,
            ..make_alert()
        };
        let payload = build_payload(&alert);
        assert_eq!(payload["embeds"][0]["fields"][0]["value"], "**unknown**");
    }

    #[test]
    fn notifier_without_endpoint_is_disabled() {
        let notifier = Notifier::new(None);
        assert!(!notifier.enabled());
    }
}
