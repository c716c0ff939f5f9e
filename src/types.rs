use std::env;
use std::path::{Path, PathBuf};

use crate::discovery::{discover_default_model_path, LIBRARY_PATH_ENV};
use crate::pipeline::{AnalyzerType, Pipeline};

/// Settings for loading a [`crate::Model`].
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    /// Model directory. `None` selects the engine's bundled model.
    pub model_path: Option<PathBuf>,
    /// User dictionary attached right after the model loads.
    pub user_dictionary_path: Option<PathBuf>,
}

impl ModelConfig {
    /// Model configuration taking `MILKCAT_MODEL_PATH` into account.
    pub fn from_env() -> Self {
        Self {
            model_path: discover_default_model_path(),
            user_dictionary_path: None,
        }
    }

    /// Sets the model directory.
    pub fn with_model_path(mut self, model_path: impl AsRef<Path>) -> Self {
        self.model_path = Some(model_path.as_ref().to_path_buf());
        self
    }

    /// Sets the user dictionary.
    pub fn with_user_dictionary(mut self, path: impl AsRef<Path>) -> Self {
        self.user_dictionary_path = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Complete configuration for [`crate::MilkCat`].
#[derive(Debug, Clone)]
pub struct MilkCatConfig {
    /// Dynamic library path. `None` uses discovery.
    pub library_path: Option<PathBuf>,
    /// Model settings.
    pub model: ModelConfig,
    /// Pipeline selection.
    pub pipeline: Pipeline,
}

impl Default for MilkCatConfig {
    fn default() -> Self {
        Self {
            library_path: env::var_os(LIBRARY_PATH_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            model: ModelConfig::from_env(),
            pipeline: Pipeline::default(),
        }
    }
}

impl MilkCatConfig {
    /// Sets the dynamic library path.
    pub fn with_library_path(mut self, library_path: impl AsRef<Path>) -> Self {
        self.library_path = Some(library_path.as_ref().to_path_buf());
        self
    }

    /// Sets the model directory.
    pub fn with_model_path(mut self, model_path: impl AsRef<Path>) -> Self {
        self.model = self.model.with_model_path(model_path);
        self
    }

    /// Sets the user dictionary.
    pub fn with_user_dictionary(mut self, path: impl AsRef<Path>) -> Self {
        self.model = self.model.with_user_dictionary(path);
        self
    }

    /// Replaces the model settings.
    pub fn with_model(mut self, model: ModelConfig) -> Self {
        self.model = model;
        self
    }

    /// Selects an engine preset.
    pub fn with_analyzer_type(mut self, analyzer_type: AnalyzerType) -> Self {
        self.pipeline = Pipeline::Preset(analyzer_type);
        self
    }

    /// Selects any pipeline.
    pub fn with_pipeline(mut self, pipeline: impl Into<Pipeline>) -> Self {
        self.pipeline = pipeline.into();
        self
    }
}
