pub mod chat_session;
pub mod corpus;
pub mod embedding;
pub mod fruit;
