mod sort_menu;

pub use sort_menu::sort_menu;
