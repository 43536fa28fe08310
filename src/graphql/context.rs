use std::sync::Arc;

use crate::data_source::FoodBankSource;

/// Per-request resolver context, attached by the HTTP handler.
#[derive(Clone)]
pub struct GraphQLContext {
    pub source: Arc<dyn FoodBankSource>,
}

impl GraphQLContext {
    pub fn new(source: Arc<dyn FoodBankSource>) -> Self {
        Self { source }
    }
}
