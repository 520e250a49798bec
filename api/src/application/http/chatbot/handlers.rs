pub mod get_session;
pub mod send_message;
