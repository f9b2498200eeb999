use crate::config::EmulatorSettings;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load emulator settings from a YAML file
pub fn load_settings(path: &Path) -> Result<EmulatorSettings> {
    info!("Loading emulator settings from: {:?}", path);

    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open settings file '{}'", path.display()))?;

    let settings: EmulatorSettings = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse settings file '{}'", path.display()))?;

    Ok(settings)
}

/// Load settings from `path` if given, otherwise use the defaults
pub fn load_settings_or_default(path: Option<&Path>) -> Result<EmulatorSettings> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(EmulatorSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_settings() {
        let yaml = r#"
mgmt_bridge: "br-lab"
images:
  nokia_srlinux: "ghcr.io/nokia/srlinux:25.3.1"
  linux: "debian:bookworm"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let settings = load_settings(temp_file.path()).unwrap();
        assert_eq!(settings.mgmt_bridge, "br-lab");
        assert_eq!(settings.images.nokia_srlinux, "ghcr.io/nokia/srlinux:25.3.1");
        assert_eq!(settings.images.crpd, "crpd:latest");
        assert_eq!(settings.images.linux, "debian:bookworm");
    }

    #[test]
    fn test_load_settings_missing_file() {
        assert!(load_settings(Path::new("/nonexistent/minilab.yaml")).is_err());
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(load_settings_or_default(None).unwrap(), EmulatorSettings::default());
    }
}
