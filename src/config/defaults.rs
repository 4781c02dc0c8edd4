pub fn default_timeout_seconds() -> u64 {
    10
}

pub fn default_poll_interval_seconds() -> u64 {
    30
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_json_format() -> bool {
    true
}
