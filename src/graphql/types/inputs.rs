use async_graphql::*;

#[derive(InputObject, Debug, Clone)]
pub struct OrganisationInput {
    pub slug: String,
}

#[derive(InputObject, Debug, Clone, Copy)]
pub struct SearchInput {
    pub lat: f64,
    pub lng: f64,
}
