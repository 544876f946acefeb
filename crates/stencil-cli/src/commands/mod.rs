//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod list;
pub mod new;

use stencil_adapters::DirectoryTemplateRepository;
use stencil_core::application::TemplateService;

use crate::config::AppConfig;

/// Template service over `templates.path`, or the built-in templates.
pub(crate) fn template_service(config: &AppConfig) -> TemplateService {
    let repository = match &config.templates.path {
        Some(path) => DirectoryTemplateRepository::new(path),
        None => DirectoryTemplateRepository::builtin(),
    };
    TemplateService::new(Box::new(repository))
}
