pub mod agents;
pub mod constant_elasticity;
pub mod engine;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use engine::SimulationEngine;
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
