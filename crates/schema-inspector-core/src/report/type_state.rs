/// How far inspection of a schema type got.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeState {
    /// Checked against at least one host type.
    Resolved,

    /// Reached, but never checked against any host type.
    Skipped,

    /// Never reached from a root operation type.
    #[default]
    Unvisited,

    /// Currently being checked.
    Visiting,
}
