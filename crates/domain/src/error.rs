#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            ReadError::from(StorageError::NotFound("knowledge_base.json".to_string())),
            ReadError::Storage(StorageError::NotFound(path)) if path == "knowledge_base.json"
        ));
    }

    #[test]
    fn test_read_error_display() {
        assert_eq!(
            ReadError::from(StorageError::NotFound("kb.json".to_string())).to_string(),
            "not found: kb.json"
        );
        assert_eq!(ReadError::Other("foo".into()).to_string(), "foo");
    }
}
