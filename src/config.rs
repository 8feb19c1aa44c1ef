//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults (the reference run)
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`TETRA_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env, Serialized}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tetraview_core::{ExplorationParams, RuleSet, Triangle};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tilt lattice configuration
    #[serde(default)]
    pub lattice: LatticeConfig,
    /// View-angle grid configuration
    #[serde(default)]
    pub grid: GridConfig,
    /// Base triangle configuration
    #[serde(default)]
    pub triangle: TriangleConfig,
    /// Allowability rule configuration
    #[serde(default)]
    pub rules: RulesConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/user.toml`
    /// 4. Environment variables (`TETRA_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TETRA_GRID__RESOLUTION=40 -> grid.resolution = 40
        figment = figment.merge(Env::prefixed("TETRA_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Parameters for one exploration run
    ///
    /// Not validated here; `Exploration::new` rejects unusable values.
    pub fn to_params(&self) -> ExplorationParams {
        ExplorationParams {
            lattice_resolution: self.lattice.resolution as usize,
            margin: self.lattice.margin as usize,
            grid_resolution: self.grid.resolution as usize,
            triangle: self.triangle.to_triangle(),
            rules: self.rules.rule_set(),
        }
    }
}

/// Tilt lattice configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeConfig {
    /// Steps over [0, pi] per tilt axis (M)
    pub resolution: u32,
    /// Steps skipped at each end of the range (O)
    pub margin: u32,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            resolution: 1000,
            margin: 1,
        }
    }
}

/// View-angle grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cells per view-angle axis (N)
    pub resolution: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { resolution: 80 }
    }
}

/// Base triangle, each angle given as `numerator * pi / denominator`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleConfig {
    /// Numerators for angles A, B, C
    pub numerators: [u32; 3],
    /// Common denominator (the numerators should sum to it)
    pub denominator: u32,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            numerators: [8, 6, 5],
            denominator: 19,
        }
    }
}

impl TriangleConfig {
    pub fn to_triangle(&self) -> Triangle {
        Triangle::from_pi_fractions(self.numerators, self.denominator)
    }
}

/// Allowability rule configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Also apply the twelve near-boundary inequalities
    pub near_boundary: bool,
}

impl RulesConfig {
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::from_near_boundary(self.near_boundary)
    }
}

/// Debug configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
