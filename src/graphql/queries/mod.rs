use async_graphql::*;
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{FoodBank, NearbyOutlet, Organisation, OrganisationInput, SearchInput};

pub struct Query;

fn source<'a>(ctx: &'a Context<'_>) -> Result<&'a GraphQLContext> {
    ctx.data::<GraphQLContext>()
        .map_err(|_| StructuredError::internal("Data source is not available for this request"))
}

// Lists and their items are nullable, so a failed fetch nulls only its own
// root field.
fn nullable_list<T>(items: Vec<T>) -> Option<Vec<Option<T>>> {
    Some(items.into_iter().map(Some).collect())
}

#[Object]
impl Query {
    /// Every organisation in the directory
    async fn organisations(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Organisation>>>> {
        let context = source(ctx)?;
        let organisations = context.source.get_all().await.map_err(|e| e.extend())?;
        debug!("Resolved {} organisations", organisations.len());
        Ok(nullable_list(organisations))
    }

    /// A single food bank by slug
    async fn organisation(
        &self,
        ctx: &Context<'_>,
        input: OrganisationInput,
    ) -> Result<Option<FoodBank>> {
        let context = source(ctx)?;
        context
            .source
            .get_by_slug(&input.slug)
            .await
            .map_err(|e| e.extend())
    }

    /// Outlets near a point, nearest first
    async fn search(
        &self,
        ctx: &Context<'_>,
        input: SearchInput,
    ) -> Result<Option<Vec<Option<NearbyOutlet>>>> {
        let context = source(ctx)?;
        let outlets = context
            .source
            .get_by_lat_lng(input.lat, input.lng)
            .await
            .map_err(|e| e.extend())?;
        debug!(
            "Resolved {} outlets near {},{}",
            outlets.len(),
            input.lat,
            input.lng
        );
        Ok(nullable_list(outlets))
    }
}
