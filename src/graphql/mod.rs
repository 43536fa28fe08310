pub mod context;
pub mod errors;
pub mod queries;
pub mod schema;
pub mod types;

pub use context::GraphQLContext;
pub use schema::{build_schema, schema_sdl, GraphQLSchema};
