use crate::config_client::{ConfigClient, SetDefaults};
use crate::error::SpotPriceError;
use crate::model::*;
use crate::spot_price_client::SpotPriceClient;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use tracing::info;

const DEFAULT_LOOKBACK_SECONDS: i64 = 6 * 3600;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotPriceHistoryConfig {
    pub lookback_seconds: Option<i64>,
    pub instance_type: Option<String>,
    pub product_description: Option<String>,
    pub availability_zone: Option<String>,
    pub max_results: Option<u32>,
    #[serde(default)]
    pub filters: Filter,
}

impl SetDefaults for SpotPriceHistoryConfig {
    fn set_defaults(&mut self) {
        if self.lookback_seconds.is_none() {
            self.lookback_seconds = Some(DEFAULT_LOOKBACK_SECONDS);
        }
    }
}

impl SpotPriceHistoryConfig {
    pub fn to_request(&self, now: DateTime<Utc>) -> Result<SpotPriceRequest, Box<dyn Error>> {
        let lookback_seconds = self.lookback_seconds.unwrap_or(DEFAULT_LOOKBACK_SECONDS);
        let start_time = Duration::try_seconds(lookback_seconds)
            .and_then(|lookback| now.checked_sub_signed(lookback))
            .ok_or(SpotPriceError::LookbackOutOfRange {
                lookback_seconds,
                now,
            })?;

        Ok(SpotPriceRequest {
            instance_type: self.instance_type.clone(),
            product_description: self.product_description.clone(),
            availability_zone: self.availability_zone.clone(),
            max_results: self.max_results,
            ..SpotPriceRequest::new(start_time, now)
        })
    }
}

pub struct SpotPriceHistoryServiceConfig {
    config_client: ConfigClient,
    spot_price_client: SpotPriceClient,
}

impl SpotPriceHistoryServiceConfig {
    pub fn new(
        config_client: ConfigClient,
        spot_price_client: SpotPriceClient,
    ) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            config_client,
            spot_price_client,
        })
    }
}

pub struct SpotPriceHistoryService {
    config: SpotPriceHistoryServiceConfig,
}

impl SpotPriceHistoryService {
    pub fn new(config: SpotPriceHistoryServiceConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<BTreeMap<String, Vec<SpotPriceItem>>, Box<dyn Error>> {
        self.run_at(Utc::now()).await
    }

    /// Fetches the configured lookback window ending at `now`, grouped per series key.
    pub async fn run_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<BTreeMap<String, Vec<SpotPriceItem>>, Box<dyn Error>> {
        let config: SpotPriceHistoryConfig = self.config.config_client.read_config_from_file()?;
        let request = config.to_request(now)?;

        let spot_prices = self
            .config
            .spot_price_client
            .fetch_spot_price_history(&request, &config.filters)
            .await?;

        let series = group_by_key(&spot_prices);

        info!(
            "Fetched {} spot prices in {} series between {} and {}",
            spot_prices.len(),
            series.len(),
            request.start_time,
            request.end_time
        );

        Ok(series)
    }
}
