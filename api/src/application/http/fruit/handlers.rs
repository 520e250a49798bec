pub mod get_fruit;
pub mod get_related_fruits;
pub mod list_fruits;
