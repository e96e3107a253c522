// Text and ids shown by the widgets. Kept free of web-sys so it can be tested
// on the host.

use paint_core::{ConfigError, Configuration, RestoreSource, Restored};

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Element id for a catalog option, e.g. `color-dc2626` or `finish-matte`.
#[inline]
pub fn option_element_id(prefix: &str, value: &str) -> String {
    format!("{}{}", prefix, value.trim_start_matches('#'))
}

pub fn summary_color(config: &Configuration) -> String {
    format!("Color: {}", config.color)
}

pub fn summary_finish(config: &Configuration) -> String {
    format!("Material: {}", capitalize(config.finish.id()))
}

pub fn summary_environment(config: &Configuration) -> String {
    format!("Environment: {}", capitalize(config.environment.id()))
}

pub const SAVED_TITLE: &str = "Configuration saved successfully!";
pub const SAVED_DESCRIPTION: &str = "Your custom car design has been saved.";
pub const SAVE_FAILED_TITLE: &str = "Could not save configuration";
pub const SHARED_TITLE: &str = "Share link copied!";
pub const SHARED_DESCRIPTION: &str = "Share this link to show your car design.";
pub const SHARE_FAILED_TITLE: &str = "Could not copy share link";

fn describe_issue(issue: &ConfigError) -> String {
    match issue {
        ConfigError::InvalidOption { field, value } => format!("unknown {} \"{}\"", field, value),
        ConfigError::MalformedPersistedState(msg) => msg.clone(),
        ConfigError::Storage(msg) => format!("storage unavailable ({})", msg),
    }
}

/// Non-fatal notice for a startup restore that had to fall back on defaults.
pub fn restore_notice(restored: &Restored) -> Option<(String, String)> {
    if restored.issues.is_empty() {
        return None;
    }
    let title = match restored.source {
        RestoreSource::ShareLink => "Some shared settings were invalid",
        RestoreSource::Saved => "Saved configuration was damaged",
        RestoreSource::Default => "Could not restore configuration",
    };
    let details = restored
        .issues
        .iter()
        .map(describe_issue)
        .collect::<Vec<_>>()
        .join("; ");
    Some((title.to_string(), format!("Using defaults for: {}", details)))
}
