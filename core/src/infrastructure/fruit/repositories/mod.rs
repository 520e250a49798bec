pub mod json_fruit_repository;
