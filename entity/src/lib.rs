pub mod log_setting;
pub mod prelude;
