pub mod app_logs;
pub mod navbar;
pub mod status_bar;
pub mod user_directory;
