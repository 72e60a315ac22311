mod filter;
mod instance_type;
mod product_description;
mod spot_price_item;
mod spot_price_request;
mod spot_price_response;

pub use crate::model::filter::Filter;
pub use crate::model::instance_type::*;
pub use crate::model::product_description::*;
pub use crate::model::spot_price_item::{group_by_key, latest_by_key, SpotPriceItem};
pub use crate::model::spot_price_request::SpotPriceRequest;
pub use crate::model::spot_price_response::SpotPriceResponse;
