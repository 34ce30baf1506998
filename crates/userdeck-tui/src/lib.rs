pub mod layout;
pub mod theme;
pub mod widgets;
