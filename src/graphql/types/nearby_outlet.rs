use async_graphql::*;
use serde::Deserialize;

use super::scalars::{coerce_float, coerce_int};
use crate::shaping::{join_address, parse_lat_lng, split_lines, Coordinates};

/// A search hit: an outlet annotated with its distance from the query point
/// and the current needs of its food bank.
#[derive(SimpleObject, Deserialize, Debug, Clone, Default, PartialEq)]
#[graphql(complex, rename_fields = "snake_case")]
#[serde(default)]
pub struct NearbyOutlet {
    pub name: Option<String>,
    pub slug: Option<String>,
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
    #[serde(rename = "distance_mi")]
    pub raw_distance_mi: Option<serde_json::Value>,
    #[graphql(skip)]
    #[serde(rename = "number_needs")]
    pub raw_number_needs: Option<serde_json::Value>,
    pub need_id: Option<String>,
    pub updated: Option<String>,
    pub updated_text: Option<String>,
    #[graphql(skip)]
    pub latt_long: Option<String>,
    #[graphql(skip)]
    #[serde(rename = "address")]
    pub raw_address: Option<String>,
    #[graphql(skip)]
    #[serde(rename = "needs")]
    pub raw_needs: Option<String>,
}

#[ComplexObject]
impl NearbyOutlet {
    async fn geo(&self) -> Option<Coordinates> {
        Some(parse_lat_lng(self.latt_long.as_deref()))
    }

    async fn address(&self) -> Option<String> {
        self.raw_address.as_deref().map(join_address)
    }

    #[graphql(name = "charity_number")]
    async fn charity_number(&self) -> Result<Option<i32>> {
        coerce_int(self.raw_charity_number.as_ref())
    }

    #[graphql(name = "distance_mi")]
    async fn distance_mi(&self) -> Result<Option<f64>> {
        coerce_float(self.raw_distance_mi.as_ref())
    }

    #[graphql(name = "number_needs")]
    async fn number_needs(&self) -> Result<Option<i32>> {
        coerce_int(self.raw_number_needs.as_ref())
    }

    async fn needs(&self) -> Option<Vec<Option<String>>> {
        self.raw_needs
            .as_deref()
            .map(|needs| split_lines(needs).into_iter().map(Some).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_search_hit() {
        let outlet: NearbyOutlet = serde_json::from_value(json!({
            "name": "Stockwell",
            "distance_mi": "0.8",
            "number_needs": 2,
            "address": "1 Road\nLondon",
            "needs": "Tea\nCoffee",
            "need_id": "abc123"
        }))
        .unwrap();

        assert_eq!(outlet.raw_distance_mi, Some(json!("0.8")));
        assert_eq!(outlet.raw_number_needs, Some(json!(2)));
        assert_eq!(outlet.raw_address.as_deref(), Some("1 Road\nLondon"));
        assert_eq!(outlet.raw_needs.as_deref(), Some("Tea\nCoffee"));
    }
}
