use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::graphql::queries::Query;

pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Build the schema. Resolvers for every type and field are fixed here; the
/// data source is supplied per request through [`GraphQLContext`].
///
/// [`GraphQLContext`]: crate::graphql::context::GraphQLContext
pub fn build_schema() -> GraphQLSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription).finish()
}

/// Schema in SDL form, for `givefood-graphql schema`.
pub fn schema_sdl() -> String {
    build_schema().sdl()
}
