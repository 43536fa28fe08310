use async_graphql::*;

use super::scalars::coerce_float_str;
use crate::shaping::Coordinates;

// Parts are kept as the source wrote them and only coerced to Float when the
// field is serialised.
#[Object]
impl Coordinates {
    async fn lat(&self) -> Result<Option<f64>> {
        self.lat.as_deref().map(coerce_float_str).transpose()
    }

    async fn lng(&self) -> Result<Option<f64>> {
        self.lng.as_deref().map(coerce_float_str).transpose()
    }
}
