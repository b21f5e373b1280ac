use anyhow::Context;
use schema_inspector::controller::ControllerMethod;
use schema_inspector::controller::ControllerRegistry;
use schema_inspector::host::HostType;
use schema_inspector::host::HostTypeRegistry;
use schema_inspector::resolver::ClassNameTypeResolver;
use std::path::Path;

/// A JSON description of an application's host types and controller
/// methods, standing in for the application itself.
///
/// ```json
/// {
///   "host_types": [
///     { "path": "garage::Car", "members": { "name": "String" } }
///   ],
///   "controllers": [
///     {
///       "coordinate": "Query.cars",
///       "controller": "CarController",
///       "name": "cars",
///       "return_type": "Vec<garage::Car>"
///     }
///   ],
///   "class_mappings": [
///     { "host_type": "garage::CarImpl", "schema_type": "Car" }
///   ],
///   "wrapper_types": ["Page"]
/// }
/// ```
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HostManifest {
    #[serde(default)]
    pub class_mappings: Vec<ClassMapping>,
    #[serde(default)]
    pub controllers: Vec<ControllerEntry>,
    #[serde(default)]
    pub host_types: Vec<HostType>,
    #[serde(default)]
    pub wrapper_types: Vec<String>,
}
impl HostManifest {
    pub fn class_name_type_resolver(&self) -> ClassNameTypeResolver {
        let mut type_resolver = ClassNameTypeResolver::new();
        for mapping in &self.class_mappings {
            type_resolver.add_mapping(mapping.host_type.as_str(), mapping.schema_type.as_str());
        }
        type_resolver
    }

    pub fn controller_registry(&self) -> anyhow::Result<ControllerRegistry> {
        let mut builder = ControllerRegistry::builder();
        for entry in &self.controllers {
            builder = builder.coordinate(entry.coordinate.as_str(), entry.method.clone())?;
        }
        Ok(builder.build())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn host_type_registry(&self) -> anyhow::Result<HostTypeRegistry> {
        Ok(HostTypeRegistry::try_from_types(self.host_types.iter().cloned())?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read host manifest {path:?}"))?;
        Self::from_json(json.as_str())
            .with_context(|| format!("Failed to parse host manifest {path:?}"))
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ClassMapping {
    pub host_type: String,
    pub schema_type: String,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ControllerEntry {
    /// `Type.field` of the schema field the method fetches.
    pub coordinate: String,
    #[serde(flatten)]
    pub method: ControllerMethod,
}
