//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleAlert as Error, LuCircleCheck as Success, LuCloudUpload as CloudUpload,
        LuFile as File, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircle as Success, BsCloudArrowUp as CloudUpload, BsExclamationCircle as Error,
        BsFileEarmark as File, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UPLOAD, Upload);
themed_icon!(CLOUD_UPLOAD, CloudUpload);
themed_icon!(FILE, File);
themed_icon!(CLOSE, Close);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
