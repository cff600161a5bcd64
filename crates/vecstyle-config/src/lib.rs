use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use vecstyle_engine::convert::{ConvertOptions, FontRule, default_fonts, extend_font_list};
use vecstyle_engine::layout::{ArtboardDescriptor, LayoutOptions, Responsiveness};
use vecstyle_engine::text::{CompilerOptions, EMPTY_PARAGRAPH_HTML};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for generated class names, ids and container names.
    pub namespace: String,
    /// Decimal places kept for opacity and letter-spacing.
    pub css_precision: u32,
    /// Responsiveness of artboards whose names don't say.
    pub responsiveness: Responsiveness,
    pub include_resizer_css: bool,
    pub empty_paragraph_html: String,
    pub point_text_extra_width: f64,
    /// Merged into the built-in font table by `aifont`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<FontRule>,
}

impl Default for Config {
    fn default() -> Self {
        let convert = ConvertOptions::default();
        let layout = LayoutOptions::default();
        Self {
            namespace: layout.namespace,
            css_precision: convert.css_precision,
            responsiveness: Responsiveness::default(),
            include_resizer_css: layout.include_resizer_css,
            empty_paragraph_html: EMPTY_PARAGRAPH_HTML.to_string(),
            point_text_extra_width: convert.point_text_extra_width,
            fonts: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/vecstyle");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The built-in font table with this config's fonts merged in.
    pub fn font_table(&self) -> Vec<FontRule> {
        extend_font_list(&default_fonts(), &self.fonts)
    }

    pub fn compiler_options(&self) -> CompilerOptions {
        CompilerOptions {
            namespace: self.namespace.clone(),
            empty_paragraph_html: self.empty_paragraph_html.clone(),
            ..CompilerOptions::default()
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            css_precision: self.css_precision,
            fonts: self.font_table(),
            point_text_extra_width: self.point_text_extra_width,
            ..ConvertOptions::default()
        }
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            namespace: self.namespace.clone(),
            include_resizer_css: self.include_resizer_css,
        }
    }

    /// Descriptor for an artboard named `name`, falling back to the configured
    /// responsiveness when the name carries no `fixed`/`dynamic` flag.
    pub fn artboard_descriptor(&self, name: &str, measured_width: u32) -> ArtboardDescriptor {
        ArtboardDescriptor::from_artboard_name(name, measured_width, self.responsiveness)
    }
}
