use thiserror::Error;

/// Errors that can occur during test environment setup.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema creation failed.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
