//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, QuoConfig, ResolveOptions, resolve_config,
};
use crate::quote::MODES;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// Interactively edits the default mode and endpoint, or with `show`
/// prints the effective configuration and where it comes from.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_config();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_config() -> Result<()> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default();
    let resolved = resolve_config(&ResolveOptions::default(), &file_config)?;

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("mode"),
        Style::value(resolved.mode)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&resolved.endpoint)
    );
    println!(
        "  {}       {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!();

    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    print_current_defaults(&config);

    let mode = select_mode(config.quo.mode.as_deref())?;
    let endpoint = prompt_endpoint(config.quo.endpoint.as_deref())?;

    let config = ConfigFile {
        quo: QuoConfig {
            mode: Some(mode),
            endpoint: Some(endpoint),
        },
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}      {}",
        Style::label("mode"),
        config
            .quo
            .mode
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .quo
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn select_mode(default: Option<&str>) -> Result<String> {
    // Build options with format "name - description"
    let options: Vec<String> = MODES
        .iter()
        .map(|(mode, description)| format!("{mode} - {description}"))
        .collect();

    let default_index = default
        .and_then(|d| {
            MODES
                .iter()
                .position(|(mode, _)| mode.as_str().eq_ignore_ascii_case(d))
        })
        .unwrap_or(0);

    let selection = Select::new("Default mode:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract the name from "name - description" format
    let name = selection.split(" - ").next().unwrap_or(&selection);

    Ok(name.to_string())
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Quote service URL:")
        .with_help_message("Base URL of the quoting service")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .prompt()?;

    if endpoint.trim().is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok(endpoint.trim().to_string())
}
