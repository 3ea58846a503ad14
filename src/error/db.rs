use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DatabaseError {
    pub fn from_sqlx_error(error: sqlx::Error, context: &str) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound(context.to_string()),
            sqlx::Error::Database(db_error) => {
                let code = db_error.code().map(|c| c.into_owned());
                match code.as_deref() {
                    Some("23505") => DatabaseError::ConstraintViolation(format!(
                        "Unique constraint violation: {}",
                        context
                    )),
                    Some("23502") => DatabaseError::ConstraintViolation(format!(
                        "Not null constraint violation: {}",
                        context
                    )),
                    Some("23514") => DatabaseError::ConstraintViolation(format!(
                        "Check constraint violation: {}",
                        context
                    )),
                    _ => DatabaseError::ConnectionError(sqlx::Error::Database(db_error)),
                }
            }
            _ => DatabaseError::ConnectionError(error),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError::from_sqlx_error(err, "Database operation failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found_with_context() {
        let err = DatabaseError::from_sqlx_error(sqlx::Error::RowNotFound, "user 42");
        assert!(matches!(err, DatabaseError::NotFound(ref msg) if msg == "user 42"));
    }

    #[test]
    fn pool_timeout_is_a_connection_error() {
        let err = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DatabaseError::ConnectionError(_)));
    }
}
