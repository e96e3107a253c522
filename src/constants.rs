// DOM hooks and presentation tuning for the web frontend.

// Catalog containers
pub const COLOR_GRID_ID: &str = "color-grid";
pub const FINISH_LIST_ID: &str = "finish-list";
pub const ENVIRONMENT_GRID_ID: &str = "environment-grid";

// Per-option element id prefixes (suffix is the option value)
pub const COLOR_OPTION_PREFIX: &str = "color-";
pub const FINISH_OPTION_PREFIX: &str = "finish-";
pub const ENVIRONMENT_OPTION_PREFIX: &str = "env-";

// Actions
pub const SAVE_BUTTON_ID: &str = "save-config";
pub const SHARE_BUTTON_ID: &str = "share-config";
pub const RESET_BUTTON_ID: &str = "reset-config";
pub const RANDOM_BUTTON_ID: &str = "random-config";

// "Current Configuration" card and viewport
pub const SUMMARY_SWATCH_ID: &str = "summary-swatch";
pub const SUMMARY_COLOR_ID: &str = "summary-color";
pub const SUMMARY_FINISH_ID: &str = "summary-finish";
pub const SUMMARY_ENVIRONMENT_ID: &str = "summary-environment";
pub const VIEWPORT_ID: &str = "viewport";

// Notices
pub const TOAST_ID: &str = "toast";
pub const TOAST_TITLE_ID: &str = "toast-title";
pub const TOAST_DESCRIPTION_ID: &str = "toast-description";
pub const TOAST_VISIBLE_MS: i32 = 3000;

// Selection styling
pub const SELECTED_CLASS: &str = "selected";

pub const LOG_LEVEL: log::Level = log::Level::Info;
