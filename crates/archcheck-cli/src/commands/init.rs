//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# archcheck configuration
# Every value below is the built-in default.

[analyzer]
# Worker threads for the composition rules (default: single-threaded)
# parallelism = 4

[composition]
# Only files under this directory get the composition rules
frontend_root = "apps/frontend/src"
# Files under this directory are screens
screens_dir = "apps/frontend/src/screens"
max_cards = 2
extensions = ["ts", "tsx"]

[boundary]
# Stop at the first forbidden token found
fail_fast = true

[[zones]]
name = "frontend"
paths = ["apps/frontend/"]
forbidden = [
    "apps/backend",
    "core/",
    "LifecycleState",
    "NodeLifecycleState",
    "panel_lifecycle",
]

[[zones]]
name = "shared"
paths = ["packages/shared/"]
forbidden = [
    "apps/backend",
    "apps/frontend",
    "core/",
    "trestle-dev-tools_legacy_backend",
    "trestle-roundhouse-frontend_legacy",
]

# Disable a rule everywhere
# [rules.raw-div]
# enabled = false
"#;

const CONFIG_NAME: &str = "archcheck.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_NAME), force)?;

    println!("Created {CONFIG_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_NAME} to match your repository layout");
    println!("  2. Run: archcheck check apps/frontend/src");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use archcheck::Config;

    #[test]
    fn template_matches_defaults() {
        let parsed = Config::parse(DEFAULT_CONFIG).unwrap();
        let defaults = Config::default();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.zones, defaults.zones);
        assert_eq!(parsed.composition.frontend_root, defaults.composition.frontend_root);
        assert_eq!(parsed.composition.screens_dir, defaults.composition.screens_dir);
        assert_eq!(parsed.composition.max_cards, defaults.composition.max_cards);
        assert_eq!(parsed.composition.extensions, defaults.composition.extensions);
        assert_eq!(parsed.boundary.fail_fast, defaults.boundary.fail_fast);
        assert_eq!(parsed.analyzer.parallelism, None);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
