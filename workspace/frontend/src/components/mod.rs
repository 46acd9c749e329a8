pub mod composer;
pub mod layout;
pub mod menu_tabs;
