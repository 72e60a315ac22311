pub mod config_client;
pub mod error;
pub mod model;
pub mod query_client;
pub mod spot_price_client;
pub mod spot_price_history_service;
