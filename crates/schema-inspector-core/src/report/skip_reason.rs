/// Why a schema type couldn't be checked against a host type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No registered host type could be found for the schema type.
    NoHostCandidate,

    /// A host type was found for the schema type, but it can't be returned
    /// by the data fetcher that leads to it. This happens for the members of
    /// a union or interface when the data fetcher declares a concrete return
    /// type: only the member bound to that type is ever returned.
    NotActiveImplementation,

    /// Host types were found for the schema type, but none is assignable to
    /// the host type declared by the data fetcher that leads to it.
    NotAssignable,

    /// The declared host type is opaque and can't be introspected.
    OpaqueHostType,

    /// The declared host type isn't in the host type registry.
    UnknownHostType,
}
impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NoHostCandidate => "no host type candidate found",
            Self::NotActiveImplementation => "not returned by the declared concrete host type",
            Self::NotAssignable => "no candidate is assignable to the declared host type",
            Self::OpaqueHostType => "declared host type is opaque",
            Self::UnknownHostType => "declared host type is not registered",
        })
    }
}
