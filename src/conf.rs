use config::{Config, Value};
use serde::{Deserialize, Serialize};
///  struct GetDefault;
///  struct GetOption;
///  struct Has;
///
///  fn settings() -> & 'static RwLock<Config>
///  fn gantry() -> &' static RwLock<Gantry>
///
///  struct Gantry
use std::sync::{OnceLock, RwLock};

//get or default
pub struct GetDefault;
pub struct GetOption;
pub struct Has;

/// get settings
/// it's not recommand to call settings() directly
/// use gantry() to get Gantry instance or use GetOption::xxx | GetDefault::xxx | Has::has
///
/// # Returns
/// * `&'static RwLock<Config>` - config instance
pub fn settings() -> &'static RwLock<Config> {
    static CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();
    CONFIG.get_or_init(|| RwLock::new(init_config()))
}

/// get gantry instance
/// falls back to the default Gantry when no config is on disk, error
/// construction during bootstrap must never abort the process
/// # Returns
/// * `&'static RwLock<Gantry>` - gantry instance
pub fn gantry() -> &'static RwLock<Gantry> {
    static GANTRY: OnceLock<RwLock<Gantry>> = OnceLock::new();
    GANTRY.get_or_init(|| {
        RwLock::new(match settings().read().unwrap().clone().try_deserialize::<Gantry>() {
            Ok(g) => g,
            Err(e) => {
                tracing::warn!("gantry config not loaded, using defaults: {}", e);
                Gantry::default()
            },
        })
    })
}

/// get gantry instance, config file required
/// # Panics
/// * if the config cannot be deserialized
pub fn gantry_must() -> Gantry {
    settings()
        .read()
        .unwrap()
        .clone()
        .try_deserialize::<Gantry>()
        .unwrap_or_else(|e| panic!("gantry loading error: {}", e))
}

/// init config
/// # Returns
/// * `Config` - config instance
fn init_config() -> Config {
    //development production testing
    let run_mode = std::env::var("GANTRY_RUN_MODE").unwrap_or("development".to_string());

    tracing::info!("GANTRY_RUN_MODE={}", run_mode);

    let config_path = std::env::var("GANTRY_CONFIG_PATH").unwrap_or("config".to_string());

    tracing::info!("Config file path: {}", config_path);

    let conf = config::File::with_name(&format!("{config_path}/config.yml")).required(false);
    let mode = config::File::with_name(&format!("{config_path}/{run_mode}.yml")).required(false);
    let local = config::File::with_name(&format!("{config_path}/local.yml")).required(false);

    let builder = Config::builder()
        .add_source(conf)
        .add_source(mode)
        .add_source(local)
        .add_source(config::Environment::with_prefix("GANTRY"));

    builder.build().unwrap()
}

/// make getter for settings, if not found, return default value
macro_rules! make_setting_getter_default {
    ($name:ident, $type:ty, $getter:ident) => {
        pub fn $name(k: &str, default: $type) -> $type {
            match settings().read() {
                Ok(guard) => guard.$getter(k).unwrap_or(default),
                Err(_) => default,
            }
        }
    };
}

/// make getter for settings, return Option value
macro_rules! make_setting_getter_option {
    ($name:ident, $type:ty, $getter:ident) => {
        pub fn $name(k: &str) -> Option<$type> {
            match settings().read() {
                Ok(guard) => guard.$getter(k).ok(),
                Err(_) => None,
            }
        }
    };
}

/// make getter for settings
macro_rules! make_setting_getter {
    ($name:ident, $type:ty, $getter:ident) => {
        impl GetDefault {
            make_setting_getter_default!($name, $type, $getter);
        }

        impl GetOption {
            make_setting_getter_option!($name, $type, $getter);
        }
    };
}

make_setting_getter!(string, String, get_string);
make_setting_getter!(boolean, bool, get_bool);
make_setting_getter!(int, i64, get_int);
make_setting_getter!(float, f64, get_float);
make_setting_getter!(table, std::collections::HashMap<String, Value>, get_table);
make_setting_getter!(array, Vec<Value>, get_array);

impl GetOption {
    pub fn get<'de, T: Deserialize<'de>>(key: &str) -> Option<T> {
        match settings().read() {
            Ok(guard) => guard.get(key).ok(),
            Err(_) => None,
        }
    }
}

impl GetDefault {
    pub fn get<'de, T: Deserialize<'de>>(key: &str, default: T) -> T {
        match settings().read() {
            Ok(guard) => guard.get(key).unwrap_or(default),
            Err(_) => default,
        }
    }
}

impl Has {
    pub fn has<T: for<'a> serde::Deserialize<'a>>(k: &str) -> bool {
        let settings = settings().read();
        match settings {
            Ok(guard) => guard.get::<T>(k).is_ok(),
            Err(_) => false,
        }
    }
}

/// HashMap<String, T>
pub type Dict<T> = std::collections::HashMap<String, T>;

/// HashMap<String, String>
pub type DictString = Dict<String>;

/// Gantry config
/// # Fields
/// * `name` - gantry name
/// * `short` - gantry short name (error code application mark)
/// * `debug` - gantry debug mode
/// * `app` - application descriptive metadata
/// * `docs` - documentation url config
/// * `log` - gantry log config
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Gantry {
    pub name: String,
    pub short: String,
    pub debug: bool,
    pub app: App,
    pub docs: Docs,
    pub log: Option<Log>,
}

/// Application descriptive metadata
/// # Fields
/// * `title` - api title
/// * `description` - api description
/// * `version` - api version
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct App {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// Documentation url config
/// # Fields
/// * `openapi_url` - machine-readable schema url, None disables it
/// * `docs_url` - interactive docs url, None disables it
/// * `redoc_url` - alternative docs url, None disables it
/// * `root_path` - path prefix the application is served behind
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Docs {
    pub openapi_url: Option<String>,
    pub docs_url: Option<String>,
    pub redoc_url: Option<String>,
    pub root_path: String,
}

/// Gantry log config
/// # Fields
/// * `level` - log level directives
/// * `console` - log to console
/// * `dirs` - log dirs
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Log {
    pub level: String,
    pub console: bool,
    pub dirs: String,
}

impl Default for Log {
    fn default() -> Self {
        Log { level: "trace".to_string(), console: true, dirs: "./logs".to_string() }
    }
}

impl Default for App {
    fn default() -> Self {
        App { title: "Gantry".to_string(), description: String::new(), version: "0.1.0".to_string() }
    }
}

impl Default for Docs {
    fn default() -> Self {
        Docs {
            openapi_url: Some("/openapi.json".to_string()),
            docs_url: Some("/docs".to_string()),
            redoc_url: Some("/redoc".to_string()),
            root_path: String::new(),
        }
    }
}

impl Default for Gantry {
    fn default() -> Self {
        Self {
            name: "Gantry".to_string(),
            short: "GNTR".to_string(),
            debug: false,
            app: Default::default(),
            docs: Default::default(),
            log: Default::default(),
        }
    }
}

#[allow(unused)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gantry_test_defaults() {
        let g = gantry().read().unwrap();
        assert_eq!(g.short, "GNTR");
        assert_eq!(g.app.version, "0.1.0");
        assert_eq!(g.docs.openapi_url.as_deref(), Some("/openapi.json"));
    }

    #[test]
    #[should_panic(expected = "gantry loading error")]
    fn gantry_must_requires_config() {
        let _ = gantry_must();
    }

    #[test]
    fn getter_missing_key() {
        assert_eq!(GetDefault::string("no.such.key", "fallback".to_string()), "fallback");
        assert!(GetOption::string("no.such.key").is_none());
        assert!(!Has::has::<String>("no.such.key"));
    }
}
