//! Knowledge base compiled into the binary.

use log::debug;
use repwise_domain as domain;

const KNOWLEDGE_BASE: &str = include_str!("../data/knowledge_base.json");

#[derive(Debug, Clone, Copy, Default)]
pub struct Bundled;

impl domain::KnowledgeRepository for Bundled {
    fn read_knowledge_base(&self) -> Result<domain::KnowledgeBase, domain::ReadError> {
        debug!("reading bundled knowledge base");
        Ok(super::parse(KNOWLEDGE_BASE)?)
    }
}
