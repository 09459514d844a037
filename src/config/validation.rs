use crate::config::types::{Config, FetcherConfig, OutputConfig, ScanConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scan_config(&config.scan)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scan configuration
fn validate_scan_config(config: &ScanConfig) -> Result<(), ConfigError> {
    if !config.index_url_template.contains("{tag}")
        || !config.index_url_template.contains("{page}")
    {
        return Err(ConfigError::Validation(
            "index-url-template must contain both {tag} and {page} placeholders".to_string(),
        ));
    }

    // The template must be a valid URL once the placeholders are filled in
    let probe = config
        .index_url_template
        .replace("{tag}", "1")
        .replace("{page}", "1");
    Url::parse(&probe)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid index-url-template: {}", e)))?;

    Url::parse(&config.detail_url_base)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid detail-url-base: {}", e)))?;

    if config.page_size == 0 {
        return Err(ConfigError::Validation(
            "page-size must be >= 1".to_string(),
        ));
    }

    if config.total_item_count == 0 {
        return Err(ConfigError::Validation(
            "total-item-count must be >= 1".to_string(),
        ));
    }

    if config.summary_limit == 0 {
        return Err(ConfigError::Validation(
            "summary-limit must be >= 1".to_string(),
        ));
    }

    if config.keywords.iter().any(|k| k.is_empty()) {
        return Err(ConfigError::Validation(
            "keywords must not contain empty strings".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_details < 1 || config.max_concurrent_details > 32 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-details must be between 1 and 32, got {}",
            config.max_concurrent_details
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agents.iter().any(|ua| ua.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "user-agents must not contain empty strings".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.result_path.is_empty() {
        return Err(ConfigError::Validation(
            "result-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
