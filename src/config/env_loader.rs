use crate::config::model::{Config, DebugConfig};
use std::env;

const DEFAULT_CATEGORIES: &str = "Ecommerce,ERP";

pub fn load_config() -> Config {
    let events_url = load_required_config("EVENTS_API_URL");
    let categories = load_list_config("EVENT_CATEGORIES", DEFAULT_CATEGORIES);

    let debug_log_unparseable = load_bool_config("DEBUG_LOG_UNPARSEABLE", false);
    let debug_event_limit = load_i32_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            log_unparseable: debug_log_unparseable,
            event_limit: debug_event_limit,
        },
        events_url,
        categories,
    }
}

fn load_required_config(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{} must be set.", name))
}

fn load_list_config(name: &str, default: &str) -> Vec<String> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_i32_config(name: &str) -> Option<i32> {
    match env::var(name) {
        Ok(value) => {
            Some(value.parse().unwrap_or_else(|_| {
                panic!("Invalid config '{}'. Expected an integer number.", name)
            }))
        }
        Err(_) => None,
    }
}
