//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "hospital-ops";
const PROJECT_FILES: [&str; 2] = ["hospital-ops.toml", ".hospital-ops.toml"];
const ENV_PREFIX: &str = "HOSPITAL_OPS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `HOSPITAL_OPS_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./hospital-ops.toml` or `./.hospital-ops.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/hospital-ops/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            );
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("hospital-ops"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hospital-ops.toml",
                r#"
[model]
name = "gemini-2.5-pro"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.model.name, "gemini-2.5-pro");
            assert_eq!(config.capabilities.latency_ms, 1500);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".hospital-ops.toml", "[capabilities]\nlatency_ms = 10\n")?;
            jail.create_file("custom.toml", "[capabilities]\nlatency_ms = 20\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.capabilities.latency_ms, 20);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("hospital-ops.toml", "[output]\ncolor = true\n")?;
            jail.set_env("HOSPITAL_OPS_OUTPUT__COLOR", "false");
            jail.set_env("HOSPITAL_OPS_MODEL__API_KEY_ENV", "GEMINI_API_KEY");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert!(!config.output.color);
            assert_eq!(config.model.api_key_env, "GEMINI_API_KEY");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("hospital-ops.toml", "[capabilities]\nlatency_ms = \"slow\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
