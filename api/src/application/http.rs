pub mod health;
pub mod menu;
pub mod pos;
pub mod server;
pub mod simulation;
