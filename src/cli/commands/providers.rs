//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, ProviderConfig};
use crate::ui::Style;

/// Prints known providers to stdout.
///
/// The built-in `openai` provider is always listed. If `specific_provider`
/// is given, shows details for that provider only.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    if let Some(provider_name) = specific_provider {
        let provider = config
            .provider(provider_name)
            .ok_or_else(|| anyhow::anyhow!("Provider '{provider_name}' not found"))?;
        print_provider_details(provider_name, &provider, &config);
        return Ok(());
    }

    println!("{}\n", Style::header("Providers"));
    for name in provider_names(&config) {
        if let Some(provider) = config.provider(&name) {
            println!("  {}{}", Style::value(&name), default_marker(&name, &config));
            println!("    endpoint: {}", Style::secondary(&provider.endpoint));
            if !provider.models.is_empty() {
                println!("    models: {}", provider.models.join(", "));
            }
        }
    }

    Ok(())
}

fn print_provider_details(name: &str, provider: &ProviderConfig, config: &ConfigFile) {
    println!("Provider: {}{}", Style::value(name), default_marker(name, config));
    println!("  endpoint = {}", provider.endpoint);
    if provider.requires_api_key() {
        let status = if provider.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        };
        println!("  api_key  = {status}");
    }
    if provider.models.is_empty() {
        println!("  models   = (none configured)");
    } else {
        println!("  models:");
        for model in &provider.models {
            println!("    - {model}");
        }
    }
}

/// Sorted provider names, including the built-in one.
fn provider_names(config: &ConfigFile) -> Vec<String> {
    let mut names: Vec<String> = config.providers.keys().cloned().collect();
    if !config.providers.contains_key(DEFAULT_PROVIDER) {
        names.push(DEFAULT_PROVIDER.to_string());
    }
    names.sort_unstable();
    names
}

fn default_marker(name: &str, config: &ConfigFile) -> &'static str {
    let default = config.bavard.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);
    if default == name { " (default)" } else { "" }
}
