pub mod get_menu;
pub mod get_menu_item;
