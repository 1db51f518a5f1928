use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unique index hit, or a delete blocked by dependent rows.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A referenced row does not exist or belongs to another user.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Optimistic concurrency check failed.
    #[error("Stale write: {0}")]
    StaleWrite(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Turn a unique-index violation into a domain message, leaving other
    /// errors untouched.
    pub fn on_unique(self, message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }

    /// Foreign-key violation raised by an insert/update: the referenced row
    /// is missing or owned by someone else.
    pub fn on_missing_reference(self, message: &str) -> Self {
        if self.is_foreign_key_violation() {
            StorageError::InvalidReference(message.to_string())
        } else {
            self
        }
    }

    /// Foreign-key violation raised by a delete: dependents still exist.
    pub fn on_dependents(self, message: &str) -> Self {
        if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_unique_leaves_other_errors_alone() {
        let err = StorageError::NotFound("Goal").on_unique("duplicate");
        assert!(matches!(err, StorageError::NotFound("Goal")));
    }

    #[test]
    fn not_found_names_the_resource() {
        assert_eq!(
            StorageError::NotFound("Workout day").to_string(),
            "Workout day not found"
        );
    }
}
