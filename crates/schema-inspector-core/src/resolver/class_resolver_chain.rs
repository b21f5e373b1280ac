use crate::host::HostType;
use crate::host::HostTypeRegistry;
use crate::resolver::ClassResolver;
use crate::resolver::ClassResolverConfigError;
use crate::schema::SchemaTypeGraph;

/// Consults each resolver in order and returns the first answer.
#[derive(Debug, Default)]
pub struct ClassResolverChain {
    resolvers: Vec<Box<dyn ClassResolver>>,
}
impl ClassResolverChain {
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resolver: impl ClassResolver + 'static) -> &mut Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn push_boxed(&mut self, resolver: Box<dyn ClassResolver>) -> &mut Self {
        self.resolvers.push(resolver);
        self
    }
}

impl ClassResolver for ClassResolverChain {
    fn check_config(
        &self,
        schema: &SchemaTypeGraph,
        registry: &HostTypeRegistry,
    ) -> Result<(), ClassResolverConfigError> {
        for resolver in &self.resolvers {
            resolver.check_config(schema, registry)?;
        }
        Ok(())
    }

    fn resolve_class(
        &self,
        schema_type_name: &str,
        declared: Option<&HostType>,
        registry: &HostTypeRegistry,
    ) -> Option<Vec<String>> {
        self.resolvers.iter().find_map(
            |resolver| resolver.resolve_class(schema_type_name, declared, registry),
        )
    }
}
