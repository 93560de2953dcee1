pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The subgraph handed to the forest builder still contains a cycle:
    /// the component holding `node_id` has no source node to root a tree at.
    #[error("subgraph is still cyclic after exclusion: component containing `{node_id}` has no source node")]
    StructuralViolation { node_id: String },
}
