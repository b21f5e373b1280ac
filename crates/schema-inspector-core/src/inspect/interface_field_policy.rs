/// Whether the fields of an interface are checked against the abstract host
/// type declared for it, in addition to the fields of each implementation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceFieldPolicy {
    /// Only concrete implementations are checked. An interface field the
    /// abstract host type lacks is fine as long as every active
    /// implementation has it.
    #[default]
    ConcreteTypesOnly,

    /// Interface fields must also be present on the abstract host type.
    IncludeAbstractType,
}
