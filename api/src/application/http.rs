pub mod chatbot;
pub mod fruit;
pub mod health;
pub mod nlp;
pub mod recommendation;
pub mod server;
