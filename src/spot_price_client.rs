use crate::error::SpotPriceError;
use crate::model::*;
use crate::query_client::{make_params, ParameterContributor, QueryClient, QueryParams};
use std::error::Error;
use tracing::{debug, info};

pub const DESCRIBE_SPOT_PRICE_HISTORY: &str = "DescribeSpotPriceHistory";

pub struct SpotPriceClientConfig {
    query_client: Box<dyn QueryClient>,
}

impl SpotPriceClientConfig {
    pub fn new(query_client: Box<dyn QueryClient>) -> Result<Self, Box<dyn Error>> {
        Ok(Self { query_client })
    }
}

pub struct SpotPriceClient {
    config: SpotPriceClientConfig,
}

impl SpotPriceClient {
    pub fn new(config: SpotPriceClientConfig) -> Self {
        Self { config }
    }

    /// Returns the spot price history in the order EC2 sent it.
    pub async fn fetch_spot_price_history(
        &self,
        request: &SpotPriceRequest,
        filter: &dyn ParameterContributor,
    ) -> Result<Vec<SpotPriceItem>, Box<dyn Error>> {
        let response = self.fetch_spot_price_history_page(request, filter).await?;

        Ok(response.spot_history_set)
    }

    /// Like [`fetch_spot_price_history`](Self::fetch_spot_price_history) but keeps the
    /// request id and next token, so the caller can ask for the following page.
    pub async fn fetch_spot_price_history_page(
        &self,
        request: &SpotPriceRequest,
        filter: &dyn ParameterContributor,
    ) -> Result<SpotPriceResponse, Box<dyn Error>> {
        let params = build_params(request, filter)?;
        debug!("Querying {} with params {:?}", DESCRIBE_SPOT_PRICE_HISTORY, params);

        let body = self.config.query_client.query(params).await?;
        let response = SpotPriceResponse::from_xml(&body)?;

        info!(
            "Retrieved {} spot prices for request {}",
            response.spot_history_set.len(),
            response.request_id
        );

        Ok(response)
    }
}

pub fn build_params(
    request: &SpotPriceRequest,
    filter: &dyn ParameterContributor,
) -> Result<QueryParams, SpotPriceError> {
    if !request.is_valid_time_range() {
        return Err(SpotPriceError::InvalidTimeRange {
            start_time: request.start_time,
            end_time: request.end_time,
        });
    }

    let mut params = make_params(DESCRIBE_SPOT_PRICE_HISTORY);

    params.insert("StartTime".to_string(), request.start_time_param());
    params.insert("EndTime".to_string(), request.end_time_param());

    insert_non_empty(&mut params, "InstanceType", &request.instance_type);
    insert_non_empty(&mut params, "ProductDescription", &request.product_description);
    insert_non_empty(&mut params, "AvailabilityZone", &request.availability_zone);
    insert_non_empty(&mut params, "NextToken", &request.next_token);
    if let Some(max_results) = request.max_results {
        params.insert("MaxResults".to_string(), max_results.to_string());
    }

    filter.add_params(&mut params);

    Ok(params)
}

fn insert_non_empty(params: &mut QueryParams, key: &str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        params.insert(key.to_string(), v.to_string());
    }
}
