pub mod chatbot;
pub mod common;
pub mod fruit;
pub mod health;
