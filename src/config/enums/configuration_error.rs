use crate::common::structs::custom_error::CustomError;

#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    ValidationError(CustomError),
}
