pub mod add_overlay;
pub mod confirm_overlay;
pub mod footer;
pub mod header;
pub mod list;
pub mod render;
