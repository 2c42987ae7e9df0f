pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod types;

pub use client::{PageResponse, YelpClient};
pub use error::YelpError;
pub use normalize::{normalize_business, normalize_businesses, NormalizedBusiness};
pub use query::SearchQuery;
pub use types::{Category, Coordinates, Location, RawBusiness, SearchResponse};
