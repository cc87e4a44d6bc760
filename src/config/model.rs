#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub events_url: String,
    pub categories: Vec<String>,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub log_unparseable: bool,
    pub event_limit: Option<i32>,
}
