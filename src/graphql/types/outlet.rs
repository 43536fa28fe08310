use async_graphql::*;
use serde::Deserialize;

use crate::shaping::{parse_lat_lng, Coordinates};

/// A physical distribution point belonging to a food bank.
#[derive(SimpleObject, Deserialize, Debug, Clone, Default, PartialEq)]
#[graphql(complex, rename_fields = "snake_case")]
#[serde(default)]
pub struct Outlet {
    pub name: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub parliamentary_constituency: Option<String>,
    pub district: Option<String>,
    pub mp_party: Option<String>,
    pub mp: Option<String>,
    pub ward: Option<String>,
    #[graphql(skip)]
    pub latt_long: Option<String>,
}

#[ComplexObject]
impl Outlet {
    async fn geo(&self) -> Option<Coordinates> {
        Some(parse_lat_lng(self.latt_long.as_deref()))
    }
}
