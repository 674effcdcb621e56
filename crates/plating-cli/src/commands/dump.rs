use super::prepare::Prepared;
use std::io::{self, Write};

/// Print the configuration file location, whitelisted profiles and URL rules
pub fn dump_config<W: Write>(prepared: &Prepared, out: &mut W) -> io::Result<()> {
    let config = &prepared.config;

    if prepared.loaded {
        writeln!(out, "Configuration file: {}", prepared.config_path.display())?;
    } else {
        writeln!(
            out,
            "Configuration file: {} (not found, using defaults)",
            prepared.config_path.display()
        )?;
    }

    writeln!(out, "{} profiles whitelisted:", config.browser.profiles.len())?;
    for profile in &config.browser.profiles {
        writeln!(out, "  * {}", profile)?;
    }

    writeln!(out, "{} URL patterns configured:", config.urls.len())?;
    for rule in &config.urls {
        writeln!(out, "  * {} => {}", rule.pattern, rule.profile)?;
    }

    Ok(())
}
