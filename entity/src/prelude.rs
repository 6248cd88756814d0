pub use super::log_setting::Entity as LogSetting;
pub use super::log_setting::LogCategory;
