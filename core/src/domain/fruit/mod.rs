pub mod catalog;
pub mod entities;
pub mod ports;
pub mod recommendation;
pub mod services;
pub mod value_objects;

pub use catalog::FruitCatalog;
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
