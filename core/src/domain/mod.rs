pub mod common;
pub mod elasticity;
pub mod health;
pub mod menu;
pub mod pos;
pub mod simulation;
