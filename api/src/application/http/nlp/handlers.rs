pub mod analyze_message;
pub mod extract_entities;
