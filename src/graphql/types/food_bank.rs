use async_graphql::*;
use serde::Deserialize;

use super::scalars::coerce_int;
use super::Outlet;
use crate::shaping::{parse_lat_lng, split_lines, Coordinates};

/// A single directory entry, with its current needs and outlets.
#[derive(SimpleObject, Deserialize, Debug, Clone, Default, PartialEq)]
#[graphql(complex, rename_fields = "snake_case")]
#[serde(default)]
pub struct FoodBank {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub closed: Option<bool>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub shopping_list_url: Option<String>,
    #[graphql(skip)]
    #[serde(rename = "charity_number")]
    pub raw_charity_number: Option<serde_json::Value>,
    pub charity_register_url: Option<String>,
    pub network: Option<String>,
    pub parliamentary_constituency: Option<String>,
    pub district: Option<String>,
    pub mp_party: Option<String>,
    pub mp: Option<String>,
    pub ward: Option<String>,
    #[graphql(skip)]
    pub latt_long: Option<String>,
    #[graphql(skip)]
    #[serde(rename = "needs")]
    pub raw_needs: Option<String>,
    #[graphql(skip)]
    pub locations: Vec<Outlet>,
}

#[ComplexObject]
impl FoodBank {
    async fn geo(&self) -> Option<Coordinates> {
        Some(parse_lat_lng(self.latt_long.as_deref()))
    }

    #[graphql(name = "charity_number")]
    async fn charity_number(&self) -> Result<Option<i32>> {
        coerce_int(self.raw_charity_number.as_ref())
    }

    async fn needs(&self) -> Option<Vec<Option<String>>> {
        self.raw_needs
            .as_deref()
            .map(|needs| split_lines(needs).into_iter().map(Some).collect())
    }

    async fn outlets(&self) -> Option<Vec<Option<Outlet>>> {
        Some(self.locations.iter().cloned().map(Some).collect())
    }
}
