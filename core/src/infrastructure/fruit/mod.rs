pub mod repositories;

pub use repositories::json_fruit_repository::JsonFruitRepository;
