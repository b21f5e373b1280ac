/// Whether a [`HostType`](crate::host::HostType) can be instantiated
/// directly.
///
/// `Abstract` host types stand in for traits and sealed enums: they may be
/// declared as a controller's return type, but the value actually returned
/// is always one of their concrete implementations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostTypeKind {
    Abstract,
    #[default]
    Concrete,
}
