#[cfg(test)]
use mockall::automock;

use crate::domain::value_objects::ReplayId;

/// Source of fresh replay identifiers
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ReplayId;
}

/// Stateless random (UUID v4) generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> ReplayId {
        ReplayId::new()
    }
}
