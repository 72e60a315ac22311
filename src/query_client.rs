use async_trait::async_trait;
use std::collections::BTreeMap;
use std::error::Error;

/// Query API parameters, keyed by wire name.
pub type QueryParams = BTreeMap<String, String>;

pub fn make_params(action: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("Action".to_string(), action.to_string());
    params
}

/// Anything that adds its own parameters to a query, like a [`Filter`](crate::model::Filter).
pub trait ParameterContributor: Sync {
    fn add_params(&self, params: &mut QueryParams);
}

impl ParameterContributor for () {
    fn add_params(&self, _params: &mut QueryParams) {}
}

/// Signs and sends EC2 Query API calls, returning the raw XML body.
///
/// Errors returned here reach the caller untouched, so implementations decide
/// how network, auth and throttling failures look.
#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn query(&self, params: QueryParams) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn make_params_sets_action_only() {
        let params = make_params("DescribeSpotPriceHistory");

        check!(params.len() == 1);
        check!(params.get("Action").map(String::as_str) == Some("DescribeSpotPriceHistory"));
    }

    #[test]
    fn unit_contributes_nothing() {
        let mut params = make_params("DescribeSpotPriceHistory");

        // act
        ().add_params(&mut params);

        check!(params.len() == 1);
    }
}
