//! Check command implementation
//!
//! Prints the effective configuration after layering the file, the
//! environment and defaults.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, path: &Path, out: &mut impl Write) -> Result<()> {
    info!(path = %path.display(), exists = path.exists(), "Checking configuration");

    writeln!(out, "# configuration file: {}", path.display())?;
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_effective_configuration() {
        let mut out = Vec::new();
        run(&CliConfig::default(), Path::new("recur.toml"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# configuration file: recur.toml\n"));
        assert!(text.contains("count = 10"));
    }
}
