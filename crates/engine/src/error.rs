use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid run window: {0}")]
    Window(#[from] core_types::CoreError),

    #[error("Failed to fetch a page: {0}")]
    Fetch(#[from] api_client::error::ApiError),

    /// A page ended on a cursor that an earlier page already ended on.
    #[error("Pagination cursor returned to '{0}'; the source is not ordered by id.")]
    StalledCursor(String),
}
