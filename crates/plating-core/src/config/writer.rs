use super::types::Config;
use crate::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub struct ConfigWriter;

impl ConfigWriter {
    /// Write a configuration to a file in the documented JSON shape
    pub fn to_file(config: &Config, path: &Path) -> Result<()> {
        tracing::debug!("Writing configuration file to: {}", path.display());

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, config)?;

        Ok(())
    }

    /// Convert a configuration to a pretty-printed JSON string
    pub fn to_string(config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}
