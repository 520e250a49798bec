pub mod corpus;
pub mod entities;
pub mod entity_extractor;
pub mod intent_classifier;
pub mod lookup_tables;
pub mod ports;
pub mod preprocessing;
pub mod response_generator;
pub mod services;
pub mod templates;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod testing;
