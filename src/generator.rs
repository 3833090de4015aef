use uuid::Uuid;

/// Source of fresh identifiers. Behind a trait so route tests can stand in
/// a failing generator.
pub trait UuidGenerator: Send + Sync {
    fn generate(&self) -> anyhow::Result<Uuid>;
}

/// Production generator: RFC 4122 version 4, drawn from the OS random source.
#[derive(Debug, Default)]
pub struct RandomGenerator;

impl UuidGenerator for RandomGenerator {
    fn generate(&self) -> anyhow::Result<Uuid> {
        Ok(Uuid::new_v4())
    }
}
