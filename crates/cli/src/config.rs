use anyhow::{anyhow, Context, Result};
use hotspot_overlay::OverlayConfig;
use std::path::Path;

/// Load an overlay config from JSON, falling back to TOML
pub fn load_overlay_config(path: &Path) -> Result<OverlayConfig> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = parse_overlay_config(&bytes)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn parse_overlay_config(bytes: &[u8]) -> Result<OverlayConfig> {
    match serde_json::from_slice(bytes) {
        Ok(config) => Ok(config),
        Err(json_err) => {
            let utf8 = std::str::from_utf8(bytes).map_err(|err| anyhow!("{json_err}; {err}"))?;
            toml::from_str(utf8).map_err(|toml_err| {
                anyhow!("Config is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}")
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_config() {
        let config = parse_overlay_config(b"percent_digits = 1\nemit_header = false\n").unwrap();
        assert_eq!(config.percent_digits, 1);
        assert_eq!(config.magnitude_digits, 3);
        assert!(!config.emit_header);
    }

    #[test]
    fn parses_json_config() {
        let config = parse_overlay_config(br#"{"magnitude_digits": 0}"#).unwrap();
        assert_eq!(config.magnitude_digits, 0);
        assert!(config.emit_header);
    }

    #[test]
    fn rejects_out_of_range_digits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.toml");
        std::fs::write(&path, "percent_digits = 20\n").unwrap();
        let err = load_overlay_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("percent_digits"), "{err:#}");
    }
}
