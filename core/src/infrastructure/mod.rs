pub mod menu;
pub mod pos;
pub mod sample;
