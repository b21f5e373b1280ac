use crate::arguments::GraphQLContext;

/// The parts of a field's execution environment that argument resolution
/// reads from.
///
/// The global context lives for the whole request. The local context, when
/// present, is set by a parent data fetcher for its subtree only.
#[derive(Clone, Debug, Default)]
pub struct DataFetchingEnvironment {
    global_context: GraphQLContext,
    local_context: Option<GraphQLContext>,
}
impl DataFetchingEnvironment {
    pub fn global_context(&self) -> &GraphQLContext {
        &self.global_context
    }

    pub fn local_context(&self) -> Option<&GraphQLContext> {
        self.local_context.as_ref()
    }

    pub fn new(global_context: GraphQLContext) -> Self {
        Self {
            global_context,
            local_context: None,
        }
    }

    pub fn with_local_context(mut self, local_context: GraphQLContext) -> Self {
        self.local_context = Some(local_context);
        self
    }
}
