// src/config/consts.rs

// Net config
pub const DATA_URL: &str =
    "https://gist.githubusercontent.com/devhammed/0bb9eeac9ff22c895100d072f489dc98/raw/nigeria-state-and-lgas.json";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("labour_finder/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "labour_providers_v1.json";
pub const LOCATIONS_CACHE_FILE: &str = "locations.json";
pub const LOG_FILE: &str = "debug.log";

// Environment overrides
pub const ENV_STORE_DIR: &str = "LABOUR_FINDER_STORE_DIR";
pub const ENV_DATA_URL: &str = "LABOUR_FINDER_DATA_URL";
pub const ENV_LOCATIONS: &str = "LABOUR_FINDER_LOCATIONS";

// Validation
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

// Window
pub const WINDOW_W: u32 = 960;
pub const WINDOW_H: u32 = 680;
pub const APP_TITLE: &str = "Labour Finder";
