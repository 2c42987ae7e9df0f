//! Search parameters shared by every page request of one run.

/// Category filter sent with every request.
pub const CATEGORIES: &str = "restaurants,bars";

/// Largest `limit` the search endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

const METERS_PER_MILE: f64 = 1609.34;

/// Query for one pagination run. The offset is supplied per request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub term: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u64,
    page_size: u32,
}

impl SearchQuery {
    /// Builds a query with the maximum page size.
    ///
    /// The radius is passed through as given; the service applies its own
    /// maximum.
    #[must_use]
    pub fn new(term: &str, latitude: f64, longitude: f64, radius_miles: u32) -> Self {
        Self {
            term: term.to_owned(),
            latitude,
            longitude,
            radius_meters: miles_to_meters(radius_miles),
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Sets the page size, clamped into `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        let clamped = page_size.clamp(1, MAX_PAGE_SIZE);
        if clamped != page_size {
            tracing::warn!(
                requested = page_size,
                used = clamped,
                "page size out of range, clamping"
            );
        }
        self.page_size = clamped;
        self
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// Converts miles to whole meters, truncating the fraction.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn miles_to_meters(miles: u32) -> u64 {
    (f64::from(miles) * METERS_PER_MILE) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miles_to_meters_truncates() {
        assert_eq!(miles_to_meters(25), 40_233);
        assert_eq!(miles_to_meters(1), 1_609);
        assert_eq!(miles_to_meters(0), 0);
    }

    #[test]
    fn huge_radius_is_not_saturated() {
        assert_eq!(miles_to_meters(u32::MAX), 6_912_062_666_535);
        let query = SearchQuery::new("happy hour", 0.0, 0.0, 3_000_000);
        assert_eq!(query.radius_meters, 4_828_020_000);
    }

    #[test]
    fn new_uses_max_page_size() {
        let query = SearchQuery::new("happy hour", 37.77, -122.42, 5);
        assert_eq!(query.page_size(), MAX_PAGE_SIZE);
        assert_eq!(query.radius_meters, 8_046);
    }

    #[test]
    fn page_size_is_clamped() {
        let query = SearchQuery::new("tacos", 0.0, 0.0, 1);
        assert_eq!(query.clone().with_page_size(0).page_size(), 1);
        assert_eq!(query.clone().with_page_size(200).page_size(), 50);
        assert_eq!(query.with_page_size(20).page_size(), 20);
    }

    #[test]
    fn radius_above_service_maximum_passes_through() {
        let query = SearchQuery::new("happy hour", 0.0, 0.0, 100);
        assert_eq!(query.radius_meters, 160_934);
    }
}
