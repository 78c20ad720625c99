use std::fmt;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use url::Url;

use crate::WEBHOOK_PREFIX;

/// Fixed set of inventory categories, in fetch/display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Seeds,
    Gear,
    Eggs,
    Cosmetics,
    EventShop,
}

impl Category {
    /// All categories in the order they are fetched each cycle.
    pub const ALL: [Category; 5] = [
        Category::Seeds,
        Category::Gear,
        Category::Eggs,
        Category::Cosmetics,
        Category::EventShop,
    ];

    /// Path segment used in the API URL.
    pub fn segment(&self) -> &'static str {
        match self {
            Category::Seeds => "seeds",
            Category::Gear => "gear",
            Category::Eggs => "eggs",
            Category::Cosmetics => "cosmetics",
            Category::EventShop => "eventshop",
        }
    }

    /// Human-readable label for reports and notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Seeds => "Seeds",
            Category::Gear => "Gear",
            Category::Eggs => "Eggs",
            Category::Cosmetics => "Cosmetics",
            Category::EventShop => "Event Shop",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One item as returned by the inventory API.
///
/// Category-specific extra fields in the response body are ignored; `name`
/// and `quantity` default when absent so a sparse record never fails the
/// whole category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
}

/// The items fetched for a single category this cycle.
#[derive(Debug, Clone)]
pub struct CategoryStock {
    pub category: Category,
    pub items: Vec<ItemRecord>,
}

/// Complete result of one fetch cycle: every category, in fetch order,
/// with an empty item list for categories that failed.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub entries: Vec<CategoryStock>,
}

impl Snapshot {
    pub fn total_items(&self) -> usize {
        self.entries.iter().map(|e| e.items.len()).sum()
    }
}

/// A watched item observed in stock this cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAlert {
    /// Item name as written in the watchlist (original casing).
    pub name: String,
    /// Category the item was found in, `None` if absent from the snapshot.
    pub category: Option<Category>,
    pub quantity: u32,
    pub previous: u32,
}

impl StockAlert {
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or("unknown")
    }
}

/// A notification endpoint validated against the accepted webhook prefix.
#[derive(Debug, Clone)]
pub struct WebhookUrl(Url);

impl WebhookUrl {
    /// Parse a webhook URL, accepting only the fixed Discord prefix.
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.starts_with(WEBHOOK_PREFIX) {
            bail!("webhook URL must start with {WEBHOOK_PREFIX}");
        }
        let url = Url::parse(raw).context("invalid webhook URL")?;
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_url(self) -> Url {
        self.0
    }
}

impl fmt::Display for WebhookUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
