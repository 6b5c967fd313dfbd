//! Platform-appropriate locations for configuration and logs.
//!
//! In development mode (cargo run), paths resolve to the current directory.
//! Installed builds use:
//! - Windows: `%APPDATA%\Photostudio\`
//! - macOS: `~/Library/Application Support/Photostudio/`
//! - Linux: `~/.config/photostudio/` (config), `~/.local/share/photostudio/` (data)

use std::path::PathBuf;

/// Returns true when running in development mode (cargo run or a debug build).
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

fn app_dir_name() -> &'static str {
    if cfg!(target_os = "linux") {
        "photostudio"
    } else {
        "Photostudio"
    }
}

/// Platform-appropriate config directory.
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(app_dir_name()))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Platform-appropriate data directory.
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(app_dir_name()))
}

/// Path to the config file (`config.json` in the config directory).
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Path to the logs directory.
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create the config and data directories if they are missing.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(&config)?;
    }
    if let Some(data) = data_dir() {
        std::fs::create_dir_all(data.join("logs"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_json() {
        let path = config_file();
        assert_eq!(path.file_name().unwrap(), "config.json");
    }

    #[test]
    fn test_dev_mode_uses_local_directories() {
        // Tests always run as debug builds under cargo
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(logs_dir(), PathBuf::from("./logs"));
    }
}
