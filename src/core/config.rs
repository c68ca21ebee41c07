use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration (file + overrides) as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    /// Open the configuration file in an editor, falling back to the
    /// platform default when the requested one fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{editor_to_use}'"));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using fallback '{default_editor}'"));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{default_editor}'"
            ))),
        }
    }
}
