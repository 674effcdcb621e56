pub mod config;
pub mod error;
pub mod resolver;

pub use config::{BrowserConfig, Config, ConfigLocator, ConfigReader, ConfigWriter, UrlRule};
pub use error::{Error, Result};
pub use resolver::UrlPattern;
