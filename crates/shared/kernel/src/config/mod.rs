use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`FOUNDRY__JOURNAL__PATH` maps to `journal.path`).
pub const ENV_PREFIX: &str = "FOUNDRY";

/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";

/// File stem used when no explicit path is given (`foundry.toml`, `foundry.yaml`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "foundry";

/// Custom error type for config loading.
#[foundry_derive::foundry_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides layered on top.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, `foundry` (any supported
///    extension) in the current working directory is read if present.
/// 2. **Environment Overrides**: variables prefixed with `FOUNDRY__`; nested keys are
///    separated by double underscores (`FOUNDRY__WIDGETS__FAMILY=mac`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, an override is malformed,
/// or the merged document does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use foundry_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct DemoConfig {
///     family: String,
/// }
///
/// let cfg: DemoConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert!(cfg.family.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref().map(|p| p.as_ref()), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .convert_case(config::Case::Snake)
}

/// An explicit path must exist; the default `foundry.*` file is optional so environment
/// overrides still apply without one.
fn load_layered<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), Path::to_path_buf);

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env);

    info!(path = %effective_path.display(), required, "Loading configuration");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry_domain::config::FoundryConfig;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn loads_toml_file() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("foundry.toml");
        fs::write(
            &file,
            "[journal]\npath = \"custom.log\"\n\n[assembly]\nbuilder = \"office\"\npreset = \"minimal\"\n",
        )
        .expect("write config");

        let cfg: FoundryConfig = load_config(Some(&file)).expect("config should load");
        assert_eq!(cfg.journal.path, PathBuf::from("custom.log"));
        assert_eq!(cfg.assembly.builder, "office");
        assert_eq!(cfg.assembly.preset, "minimal");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    #[serial]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let result = load_config::<FoundryConfig>(Some(dir.path().join("absent.toml")));

        let err = result.expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    }

    #[test]
    #[serial]
    fn env_overrides_apply_without_config_file() {
        let vars = config::Map::from([
            ("FOUNDRY__WIDGETS__FAMILY".to_owned(), "mac".to_owned()),
            ("FOUNDRY__ASSEMBLY__PRESET".to_owned(), "minimal".to_owned()),
        ]);

        let cfg: FoundryConfig =
            load_layered(None, environment().source(Some(vars))).expect("env-only config loads");

        assert_eq!(cfg.widgets.family.as_deref(), Some("mac"));
        assert_eq!(cfg.assembly.preset, "minimal");
        assert_eq!(cfg.assembly.builder, "gaming");
    }
}
