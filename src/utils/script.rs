//! Output file helpers.
//!
//! Provides functions to write generated documents and executable shell
//! scripts into the output directory.

use color_eyre::eyre::WrapErr;
use std::path::{Path, PathBuf};

/// Write a shell script and mark it executable.
///
/// # Parameters
/// - `dir`: Directory where the script is written (must already exist)
/// - `script_name`: Filename for the script (e.g., "start.sh")
/// - `content`: The script content
pub fn write_executable_script(
    dir: &Path,
    script_name: &str,
    content: &str,
) -> color_eyre::eyre::Result<PathBuf> {
    let script_path = dir.join(script_name);
    std::fs::write(&script_path, content)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write script {:?}: {}", script_path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&script_path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script_path, perms)?;
    }

    Ok(script_path)
}

/// Serialize `value` as YAML into `dir/file_name`
pub fn write_yaml<T: serde::Serialize>(
    dir: &Path,
    file_name: &str,
    value: &T,
) -> color_eyre::eyre::Result<PathBuf> {
    let path = dir.join(file_name);
    let yaml = serde_yaml::to_string(value)?;
    std::fs::write(&path, yaml).wrap_err_with(|| format!("Failed to write {:?}", path))?;
    Ok(path)
}
