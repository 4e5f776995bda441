use serde_json::to_value;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;

const REDACTED: &str = "<redacted>";

pub fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    output_success(output_format, "Effective configuration", to_value(redacted(config))?, None)
}

fn redacted(config: &AppConfig) -> AppConfig {
    let mut shown = config.clone();
    if !shown.security.jwt_secret.is_empty() {
        shown.security.jwt_secret = REDACTED.to_string();
    }
    shown
}
