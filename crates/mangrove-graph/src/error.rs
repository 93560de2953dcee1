pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge references a node that is not in the graph: `{id}`")]
    MissingEndpoint { id: String },
}
