use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Demo-app preferences persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSettings {
    pub theme: String,
    pub reduce_motion: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            reduce_motion: false,
        }
    }
}

impl DemoSettings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf, String> {
        let config_dir = if cfg!(target_os = "windows") || cfg!(target_os = "macos") {
            dirs::config_dir()
                .ok_or("Could not find config directory")?
                .join("dioxus-overlays")
        } else {
            // Linux/Unix: $HOME/.dioxus-overlays
            dirs::home_dir()
                .ok_or("Could not find home directory")?
                .join(".dioxus-overlays")
        };

        Ok(config_dir)
    }

    /// Get the full path to the settings file
    pub fn settings_path() -> Result<PathBuf, String> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file, falling back to defaults when no
    /// file exists yet.
    pub fn load() -> Result<Self, String> {
        let path = Self::settings_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read settings file: {}", e))?;

        let settings: DemoSettings = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings file: {}", e))?;

        Ok(settings)
    }

    /// Save settings to the config file
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::settings_dir()?;

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }

        let path = Self::settings_path()?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings file: {}", e))?;

        // Owner read/write only on Unix-like systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)
                .map_err(|e| format!("Failed to get file metadata: {}", e))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)
                .map_err(|e| format!("Failed to set file permissions: {}", e))?;
        }

        Ok(())
    }
}
