use async_graphql::*;
use serde::Deserialize;

use super::scalars::coerce_int;
use crate::shaping::{parse_lat_lng, Coordinates};

/// Parent entity of a food bank network, as listed by the directory.
#[derive(SimpleObject, Deserialize, Debug, Clone, Default, PartialEq)]
#[graphql(complex, rename_fields = "snake_case")]
#[serde(default)]
pub struct Organisation {
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
}

#[ComplexObject]
impl Organisation {
    async fn geo(&self) -> Option<Coordinates> {
        Some(parse_lat_lng(self.latt_long.as_deref()))
    }

    #[graphql(name = "charity_number")]
    async fn charity_number(&self) -> Result<Option<i32>> {
        coerce_int(self.raw_charity_number.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_listing_entry() {
        let organisation: Organisation = serde_json::from_value(json!({
            "name": "Leeds South",
            "slug": "leeds-south",
            "charity_number": "1139512",
            "closed": false,
            "latt_long": "53.77,-1.55",
            "unexpected": { "ignored": true }
        }))
        .unwrap();

        assert_eq!(organisation.slug.as_deref(), Some("leeds-south"));
        assert_eq!(organisation.raw_charity_number, Some(json!("1139512")));
        assert_eq!(organisation.closed, Some(false));
        assert_eq!(organisation.latt_long.as_deref(), Some("53.77,-1.55"));
        assert_eq!(organisation.ward, None);
    }
}
