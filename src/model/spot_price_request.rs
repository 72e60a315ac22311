use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, TimeZone, Utc};

/// Query for DescribeSpotPriceHistory. Optional fields left empty are not sent,
/// which EC2 treats as unfiltered.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotPriceRequest {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    /// One of [`INSTANCE_TYPES`](crate::model::INSTANCE_TYPES), e.g. `m1.small`.
    pub instance_type: Option<String>,
    /// One of [`PRODUCT_DESCRIPTIONS`](crate::model::PRODUCT_DESCRIPTIONS), e.g. `Linux/UNIX`.
    pub product_description: Option<String>,
    /// e.g. `us-east-1a`.
    pub availability_zone: Option<String>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

impl SpotPriceRequest {
    pub fn new<Tz: TimeZone>(start_time: DateTime<Tz>, end_time: DateTime<Tz>) -> Self {
        Self {
            start_time: start_time.with_timezone(&start_time.offset().fix()),
            end_time: end_time.with_timezone(&end_time.offset().fix()),
            instance_type: None,
            product_description: None,
            availability_zone: None,
            max_results: None,
            next_token: None,
        }
    }

    pub fn with_instance_type(mut self, instance_type: &str) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_product_description(mut self, product_description: &str) -> Self {
        self.product_description = Some(product_description.into());
        self
    }

    pub fn with_availability_zone(mut self, availability_zone: &str) -> Self {
        self.availability_zone = Some(availability_zone.into());
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_next_token(mut self, next_token: &str) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn is_valid_time_range(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn start_time_param(&self) -> String {
        format_utc_rfc3339(&self.start_time)
    }

    pub fn end_time_param(&self) -> String {
        format_utc_rfc3339(&self.end_time)
    }
}

fn format_utc_rfc3339(time: &DateTime<FixedOffset>) -> String {
    time.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use chrono_tz::Europe::Amsterdam;

    #[test]
    fn new_keeps_the_instant_of_a_named_time_zone() {
        let start_time = Amsterdam.with_ymd_and_hms(2010, 8, 16, 2, 0, 0).unwrap();
        let end_time = Amsterdam.with_ymd_and_hms(2010, 8, 16, 8, 0, 0).unwrap();

        // act
        let request = SpotPriceRequest::new(start_time, end_time);

        check!(request.start_time == start_time);
        check!(request.end_time == end_time);
        check!(request.start_time.offset().local_minus_utc() == 2 * 3600);
    }

    #[test]
    fn time_params_are_rfc3339_in_utc() {
        let request = SpotPriceRequest::new(
            Amsterdam.with_ymd_and_hms(2010, 8, 16, 2, 0, 0).unwrap(),
            Amsterdam.with_ymd_and_hms(2010, 8, 16, 8, 0, 0).unwrap(),
        );

        check!(request.start_time_param() == "2010-08-16T00:00:00Z");
        check!(request.end_time_param() == "2010-08-16T06:00:00Z");
    }

    #[test]
    fn time_params_drop_subsecond_precision() {
        let start_time = DateTime::parse_from_rfc3339("2010-08-16T05:06:11.123-04:00").unwrap();

        // act
        let request = SpotPriceRequest::new(start_time, start_time + chrono::Duration::hours(1));

        check!(request.start_time_param() == "2010-08-16T09:06:11Z");
        check!(request.end_time_param() == "2010-08-16T10:06:11Z");
    }

    #[test]
    fn is_valid_time_range_compares_instants_not_wall_clock() {
        // 01:00 in New York is after 06:00 in Amsterdam on the same day
        let start_time = DateTime::parse_from_rfc3339("2010-08-16T06:00:00+02:00").unwrap();
        let end_time = DateTime::parse_from_rfc3339("2010-08-16T01:00:00-04:00").unwrap();

        let request = SpotPriceRequest::new(start_time, end_time);

        check!(request.is_valid_time_range());
    }

    #[test]
    fn is_valid_time_range_rejects_equal_times() {
        let time = Utc.with_ymd_and_hms(2010, 8, 16, 0, 0, 0).unwrap();

        let request = SpotPriceRequest::new(time, time);

        check!(!request.is_valid_time_range());
    }

    #[test]
    fn builders_set_optional_fields() {
        let request = SpotPriceRequest::new(
            Utc.with_ymd_and_hms(2010, 8, 16, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2010, 8, 16, 6, 0, 0).unwrap(),
        )
        .with_instance_type("m1.small")
        .with_product_description("Linux/UNIX")
        .with_availability_zone("us-east-1a")
        .with_max_results(100)
        .with_next_token("abc");

        check!(request.instance_type.as_deref() == Some("m1.small"));
        check!(request.product_description.as_deref() == Some("Linux/UNIX"));
        check!(request.availability_zone.as_deref() == Some("us-east-1a"));
        check!(request.max_results == Some(100));
        check!(request.next_token.as_deref() == Some("abc"));
    }
}
