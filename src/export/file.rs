//! File saving for exported images.

use super::types::EncodingError;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct ExportFileConfig {
    /// Directory to write exported images to.
    pub directory: PathBuf,
    /// File name prefix, followed by the Unix timestamp and `.png`.
    pub filename_prefix: String,
}

impl Default for ExportFileConfig {
    fn default() -> Self {
        Self {
            directory: dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("drawpad"),
            filename_prefix: "DrawingApp_".to_string(),
        }
    }
}

impl ExportFileConfig {
    /// Builds the file configuration from the `[export]` config section.
    pub fn from_config(config: &crate::config::ExportConfig) -> Self {
        let mut file_config = Self::default();
        if let Some(directory) = &config.directory {
            file_config.directory = expand_tilde(directory);
        }
        file_config.filename_prefix = config.filename_prefix.clone();
        file_config
    }
}

/// Generate a file name from the prefix and a Unix timestamp in seconds.
///
/// ```
/// assert_eq!(
///     drawpad::export::file::generate_filename("DrawingApp_", 1700000000),
///     "DrawingApp_1700000000.png"
/// );
/// ```
pub fn generate_filename(prefix: &str, unix_seconds: i64) -> String {
    format!("{}{}.png", prefix, unix_seconds)
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized (absolute) path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, EncodingError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory.canonicalize()?;
    Ok(canonical)
}

/// Save PNG data to `<directory>/<prefix><unix-seconds>.png`.
///
/// # Returns
/// Absolute path to the saved file
pub fn save_png(image_data: &[u8], config: &ExportFileConfig) -> Result<PathBuf, EncodingError> {
    let directory = ensure_directory_exists(&config.directory)?;

    let filename = generate_filename(&config.filename_prefix, crate::util::unix_timestamp());
    let file_path = directory.join(&filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::info!("Drawing saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
