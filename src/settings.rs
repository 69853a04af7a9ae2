use std::path::PathBuf;

use config::{Config, Environment};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::SetupResult;

/// Environment variables `GRAPH_SETUP_BASE_DIR` and `GRAPH_SETUP_SEED` override the defaults.
pub const ENV_PREFIX: &str = "GRAPH_SETUP";

/// Where the data tree lives and how sample graphs are seeded.
#[derive(Clone, Debug, Deserialize)]
pub struct SetupConfig {
    /// Project base directory; `data/instances` is created beneath it.
    pub base_dir: PathBuf,
    /// Fixed seed for reproducible sample graphs. Entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SetupConfig {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> SetupConfig {
        SetupConfig { base_dir: base_dir.into(), seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> SetupConfig {
        self.seed = Some(seed);
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn load() -> SetupResult<SetupConfig> {
        SetupConfig::load_from(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    pub(crate) fn load_from(environment: Environment) -> SetupResult<SetupConfig> {
        let settings = Config::builder()
            .set_default("base_dir", ".")?
            .add_source(environment)
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => crate::default_rng(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(Some(source))
    }

    #[test]
    fn defaults_to_current_directory_without_seed() {
        let config = SetupConfig::load_from(environment(&[])).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("."));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn environment_overrides_base_dir_and_seed() {
        let config = SetupConfig::load_from(environment(&[
            ("GRAPH_SETUP_BASE_DIR", "/srv/graphs"),
            ("GRAPH_SETUP_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/srv/graphs"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        let result = SetupConfig::load_from(environment(&[("GRAPH_SETUP_SEED", "many")]));
        assert!(result.is_err());
    }

    #[test]
    fn seeded_rngs_repeat() {
        use rand::Rng;
        let config = SetupConfig::new("unused").with_seed(7);
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
