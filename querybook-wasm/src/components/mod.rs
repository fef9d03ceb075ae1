pub mod banner;
pub mod catalog;
pub mod loading;
pub mod post_list;
pub mod post_modal;
pub mod theme_panel;
