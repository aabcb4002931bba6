//! Knowledge base read from a JSON file at runtime.

use std::{io::ErrorKind, path::PathBuf};

use log::debug;
use repwise_domain as domain;

#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl domain::KnowledgeRepository for File {
    fn read_knowledge_base(&self) -> Result<domain::KnowledgeBase, domain::ReadError> {
        debug!("reading knowledge base from {}", self.path.display());
        let json = std::fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => domain::StorageError::NotFound(self.path.display().to_string()),
            _ => domain::StorageError::Other(Box::new(err)),
        })?;
        Ok(super::parse(&json)?)
    }
}
