pub mod get_fruits_for_disease;
pub mod recommend_fruits;
