pub mod calculator;
pub mod entities;
pub mod value_objects;

pub use calculator::*;
pub use entities::*;
pub use value_objects::*;
