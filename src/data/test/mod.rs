mod log_setting;
