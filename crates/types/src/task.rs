use crate::options::RenderOptions;
use crate::problem::Problem;
use serde::{Deserialize, Serialize};

/// One printable assignment: its problems plus the presentation and identity
/// fields that belong to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(flatten)]
    pub options: RenderOptions,
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl Task {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self {
            options: RenderOptions::default(),
            problems,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// The effective settings for this task under run-level `defaults`.
    pub fn settings(&self, defaults: &RenderOptions) -> RenderOptions {
        defaults.overlay(&self.options)
    }
}
