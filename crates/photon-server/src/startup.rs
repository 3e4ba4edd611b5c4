//! Server startup utilities.

use photon_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____  __          __
   / __ \/ /_  ____  / /_____  ____
  / /_/ / __ \/ __ \/ __/ __ \/ __ \
 / ____/ / / / /_/ / /_/ /_/ / / / /
/_/   /_/ /_/\____/\__/\____/_/ /_/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    for line in startup_lines(config) {
        info!("{}", line);
    }
}

/// Endpoint and backend summary shown at startup.
pub fn startup_lines(config: &AppConfig) -> Vec<String> {
    let base = format!("http://{}", config.server.addr());
    let separator = "=".repeat(60);

    let mut lines = vec![
        separator.clone(),
        format!("Photos:    {}/photos", base),
        format!("Cached:    {}/photos/cache", base),
        format!("Health:    {}/health", base),
        format!("API Docs:  {}/api-docs/openapi.json", base),
    ];
    if config.observability.metrics_enabled {
        lines.push(format!("Metrics:   {}{}", base, config.observability.metrics_path));
    }
    lines.push(format!("Upstream:  {}", config.upstream.url));
    if config.redis.enabled {
        lines.push(format!("Redis:     {}", config.redis.url));
    } else {
        lines.push("Redis:     disabled".to_string());
    }
    lines.push(separator);
    lines
}
