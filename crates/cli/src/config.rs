//! Configuration loading and inspection.

use std::path::Path;

use anyhow::Context;

use patter_domain::config::Config;
use patter_transport::HttpTransport;

/// Load `patter.toml`, or fall back to full defaults when the file does not
/// exist.  A file that exists but fails to parse is an error.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file found, using defaults");
        return Ok(Config::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Print the effective configuration as TOML.
pub fn show(config: &Config) {
    match toml::to_string_pretty(config) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("failed to render configuration: {e}"),
    }
}

/// Check the configuration loads and a transport can be built from it.
/// Returns `false` on any problem.
pub fn validate(path: &Path) -> bool {
    let config = match load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e:#}");
            return false;
        }
    };

    match HttpTransport::from_config(&config.transport) {
        Ok(_) => {
            println!("configuration OK");
            true
        }
        Err(e) => {
            eprintln!("invalid transport configuration: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("/nonexistent/patter.toml")).unwrap();
        assert_eq!(config.transport.timeout_secs, 120);
    }

    #[test]
    fn file_contents_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patter.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "[transport]\nchat_url = \"https://proxy.internal/chat\"\ntimeout_secs = 30\n"
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.transport.chat_url, "https://proxy.internal/chat");
        assert_eq!(config.transport.timeout_secs, 30);
        assert_eq!(config.session.brand, "Gucci");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patter.toml");
        std::fs::write(&path, "[transport\nbroken").unwrap();
        assert!(load(&path).is_err());
    }
}
