use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::template::ProjectTemplate;

/// Source layer of copied assets, ordered by precedence.
///
/// Layers are copied lowest first, so a file from a higher layer replaces a
/// file at the same relative path from a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetLayer {
    Shared,
    Cicd,
    Template,
}

impl AssetLayer {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Cicd => "cicd",
            Self::Template => "template",
        }
    }
}

impl fmt::Display for AssetLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directory copy in a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStep {
    pub layer: AssetLayer,
    pub source: PathBuf,
    /// Copy only the direct child files of `source`.
    pub files_only: bool,
}

/// Ordered copy steps for a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    steps: Vec<CopyStep>,
}

impl GenerationPlan {
    pub fn for_template(template: &ProjectTemplate) -> Self {
        let mut steps = vec![
            CopyStep {
                layer: AssetLayer::Template,
                source: template.template_directory.clone(),
                files_only: false,
            },
            CopyStep {
                layer: AssetLayer::Shared,
                source: template.shared_files_directory.clone(),
                files_only: true,
            },
        ];

        if let Some(cicd) = template.cicd_directory() {
            steps.push(CopyStep {
                layer: AssetLayer::Cicd,
                source: cicd,
                files_only: false,
            });
        }

        steps.sort_by_key(|step| step.layer);
        Self { steps }
    }

    pub fn steps(&self) -> &[CopyStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
