pub mod observed_demand;
pub mod sync_menu;
