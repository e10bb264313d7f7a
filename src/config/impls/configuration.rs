use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker_config: TrackerConfig::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and list your trackers, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(self.log_level.as_str()).map_err(ConfigurationError::ValidationError)?;

        let tracker_config = &self.tracker_config;
        if tracker_config.trackers.is_empty() {
            return Err(ConfigurationError::ValidationError(CustomError::new("no trackers configured")));
        }

        let address_check = Regex::new(r"^[^\s:]+:\d{1,5}$").map_err(|e| {
            ConfigurationError::ValidationError(CustomError::new(&e.to_string()))
        })?;
        for tracker in tracker_config.trackers.iter() {
            let port_valid = tracker
                .rsplit(':')
                .next()
                .and_then(|port| port.parse::<u16>().ok())
                .is_some_and(|port| port != 0);
            if !address_check.is_match(tracker) || !port_valid {
                return Err(ConfigurationError::ValidationError(CustomError::new(
                    &format!("tracker address '{}' is not in host:port form", tracker)
                )));
            }
        }

        if tracker_config.dial_timeout == 0 {
            return Err(ConfigurationError::ValidationError(CustomError::new("dial_timeout must be greater than zero")));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
