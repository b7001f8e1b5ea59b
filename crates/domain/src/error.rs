#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<CreateError> for UpdateError {
    fn from(value: CreateError) -> Self {
        match value {
            CreateError::Conflict => UpdateError::Conflict,
            CreateError::Storage(storage) => UpdateError::Storage(storage),
            CreateError::Other(other) => UpdateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_error_from_create_error() {
        assert!(matches!(
            UpdateError::from(CreateError::Conflict),
            UpdateError::Conflict
        ));
        assert!(matches!(
            UpdateError::from(CreateError::Storage(StorageError::Unavailable)),
            UpdateError::Storage(StorageError::Unavailable)
        ));
        assert!(matches!(
            UpdateError::from(CreateError::Other("foo".into())),
            UpdateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_transparent_messages() {
        assert_eq!(
            ReadError::from(StorageError::Unavailable).to_string(),
            "storage unavailable"
        );
        assert_eq!(
            CreateError::from(StorageError::Poisoned).to_string(),
            "storage lock poisoned"
        );
        assert_eq!(UpdateError::NotFound.to_string(), "not found");
    }
}
