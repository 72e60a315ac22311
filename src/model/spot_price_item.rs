use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SpotPriceHistorySetItemType
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotPriceItem {
    pub instance_type: String,
    pub product_description: String,
    pub spot_price: f64,
    pub timestamp: DateTime<Utc>,
    pub availability_zone: String,
}

impl SpotPriceItem {
    /// Identifies the price series this item belongs to; items at different
    /// timestamps share the same key.
    pub fn key(&self) -> String {
        format!(
            "{}.{}.{}",
            self.availability_zone, self.instance_type, self.product_description
        )
    }
}

/// Splits items into series per key, keeping the incoming order within each series.
pub fn group_by_key(items: &[SpotPriceItem]) -> BTreeMap<String, Vec<SpotPriceItem>> {
    let mut series: BTreeMap<String, Vec<SpotPriceItem>> = BTreeMap::new();
    for item in items {
        series.entry(item.key()).or_default().push(item.clone());
    }
    series
}

pub fn latest_by_key(items: &[SpotPriceItem]) -> BTreeMap<String, SpotPriceItem> {
    let mut latest: BTreeMap<String, SpotPriceItem> = BTreeMap::new();
    for item in items {
        match latest.get(&item.key()) {
            Some(current) if current.timestamp > item.timestamp => {}
            _ => {
                latest.insert(item.key(), item.clone());
            }
        }
    }
    latest
}
