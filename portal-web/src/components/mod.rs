pub mod footer;
pub mod header;
pub mod nav_link;
pub mod section_nav;
pub mod toast;
