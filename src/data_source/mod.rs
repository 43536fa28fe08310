//! The food bank directory the API reads from.
//!
//! Resolvers only see the [`FoodBankSource`] trait, so the HTTP client can be
//! swapped for an in-memory source in tests.

pub mod errors;
pub mod givefood;

use async_trait::async_trait;

use crate::graphql::types::{FoodBank, NearbyOutlet, Organisation};

pub use errors::DataSourceError;
pub use givefood::GiveFoodClient;

pub type Result<T> = std::result::Result<T, DataSourceError>;

#[async_trait]
pub trait FoodBankSource: Send + Sync {
    /// Every organisation in the directory.
    async fn get_all(&self) -> Result<Vec<Organisation>>;

    /// A single food bank, or `None` when the slug is unknown.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<FoodBank>>;

    /// Outlets near a point, in the order the directory ranks them.
    async fn get_by_lat_lng(&self, lat: f64, lng: f64) -> Result<Vec<NearbyOutlet>>;
}
