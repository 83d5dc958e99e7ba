pub mod catalog;

pub use catalog::{first_live_stream, CatalogSeed, EventCatalog, InMemoryEventCatalog};

#[cfg(test)]
pub use catalog::MockEventCatalog;
