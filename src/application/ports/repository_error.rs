/// Failures shared by the user, file and chat stores. Absent rows are not
/// errors: lookups return `Option` and deletes report whether a row went away.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database unreachable: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    /// A uniqueness or ownership rule rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
