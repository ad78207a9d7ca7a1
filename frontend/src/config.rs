use shared::{REVEAL_DELAY_MS, SIGN_IN_PATH};

pub struct Config;

impl Config {
    pub const APP_NAME: &'static str = "Swasthya";
    pub const ANALYTICS_TITLE: &'static str = "Analytics | Swasthya";
    pub const VERIFICATION_TITLE: &'static str = "Verification | Swasthya";
    pub const SIGN_IN_TITLE: &'static str = "Sign In | Swasthya";
    pub const NOT_FOUND_TITLE: &'static str = "Not Found | Swasthya";

    pub const LOGO_PATH: &'static str = "/images/logo.png";
    /// Wrapper class that applies the Jost font family.
    pub const FONT_CLASS: &'static str = "font-jost";

    /// LocalStorage key holding the signed-in identity
    pub const USER_STORAGE_KEY: &'static str = "user";

    pub fn reveal_delay_ms() -> u32 {
        REVEAL_DELAY_MS
    }

    pub fn sign_in_path() -> &'static str {
        SIGN_IN_PATH
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
