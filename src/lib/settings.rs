use config::{Config, Environment, File, FileFormat};
use std::fs;

use crate::version::VERSION_FILE;

#[derive(serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Settings {
    // Server host and port to run on
    pub host: String,
    pub port: String,
    // What environment - local, dev, stage, prod
    pub environment: String,
    pub log_level: String,
    // CSV of World Cup finals, loaded once at start-up
    pub dataset_path: String,
    pub sentry_dsn: String,
    pub statsd_host: String,
    pub statsd_port: u16,
    // Written by make_version_file, served at /__version__
    #[serde(default = "default_version_file")]
    pub version_file: String,
}

fn default_version_file() -> String {
    VERSION_FILE.to_string()
}

impl Settings {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait HasFile {
    fn file(&self) -> &str;
}
pub struct SettingsFile {}
impl HasFile for SettingsFile {
    fn file(&self) -> &str {
        "settings.yaml"
    }
}

fn _get_settings(settings: impl HasFile) -> Settings {
    let mut builder = Config::builder();
    // Either we use a settings.yaml file, or environment variables
    let settings_file = settings.file();
    builder = match fs::metadata(settings_file) {
        Ok(metadata) => match metadata.is_file() {
            true => builder.add_source(File::new(settings_file, FileFormat::Yaml)),
            false => panic!("Given settings file is not a file"),
        },
        Err(error) => match error.kind() {
            std::io::ErrorKind::NotFound => builder.add_source(Environment::default()),
            _ => panic!("Unexpected error when loading metadata."),
        },
    };
    let config = builder.build().expect("Config couldn't be built.");
    match config.try_deserialize::<Settings>() {
        Ok(settings) => settings,
        Err(e) => panic!("Config didn't match serialization. {:?}", e),
    }
}

pub fn get_settings() -> Settings {
    _get_settings(SettingsFile {})
}
