pub mod json_training_data;

pub use json_training_data::JsonTrainingDataRepository;
