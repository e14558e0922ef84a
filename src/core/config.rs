use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the file on disk, or the effective defaults when there is none.
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");

        if path.exists() {
            println!("{}", fs::read_to_string(path)?);
        } else {
            info(format!("No file at {}, showing defaults.", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }
        Ok(())
    }

    /// Report keys missing from the file. Returns them.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!("Configuration file not found: {}", path.display()));
            return Ok(Vec::new());
        }

        let missing = Config::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing keys: {} (run `config --migrate` to add them)",
                missing.join(", ")
            ));
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        let added = migrate::fill_missing_keys(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        }
        Ok(added)
    }

    /// Open the file in `editor`, then $EDITOR / $VISUAL, then nano (notepad on Windows).
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let first = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&first).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", first));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                first, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, s
            ))),
            Err(e) => Err(AppError::Config(format!(
                "failed to launch '{}': {}",
                default_editor, e
            ))),
        }
    }
}
