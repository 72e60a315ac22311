use crate::model::spot_price_item::SpotPriceItem;
use serde::{Deserialize, Deserializer};
use std::error::Error;

/// Response to DescribeSpotPriceHistory
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotPriceResponse {
    #[serde(default)]
    pub request_id: String,
    #[serde(
        rename = "spotPriceHistorySet",
        default,
        deserialize_with = "deserialize_items"
    )]
    pub spot_history_set: Vec<SpotPriceItem>,
    #[serde(default)]
    pub next_token: String,
}

#[derive(Deserialize, Default)]
struct ItemSet {
    #[serde(rename = "item", default)]
    items: Vec<SpotPriceItem>,
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<SpotPriceItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ItemSet::deserialize(deserializer)?.items)
}

impl SpotPriceResponse {
    pub fn from_xml(body: &str) -> Result<Self, Box<dyn Error>> {
        Ok(quick_xml::de::from_str(body)?)
    }

    pub fn has_next_page(&self) -> bool {
        !self.next_token.is_empty()
    }
}
