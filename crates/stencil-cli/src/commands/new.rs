//! Implementation of the `stencil new` command.
//!
//! Translates CLI arguments into a `ProjectTemplate`, hands it to the core
//! generator and reports the result. No template rules live here.

use std::{
    io::IsTerminal as _,
    path::{Path, PathBuf},
};

use serde_json::json;
use tracing::{debug, info, instrument};

use stencil_adapters::LocalFilesystem;
use stencil_core::{
    application::{GenerationReport, ProjectGenerator, TemplateService},
    domain::{CicdType, DomainError, GenerationPlan, ProjectTemplate, validate_project_name},
    error::StencilError,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stencil new` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Resolve the CI/CD variant and the template (flag → config → prompt)
/// 3. Early-exit if `--dry-run`, after running the same checks as a real run
/// 4. Generate via `ProjectGenerator`
/// 5. Print the summary and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Project name and destination
    validate_project_name(&args.name).map_err(StencilError::from)?;
    let destination = destination_for(args.output.as_deref(), &args.name);

    // 2. Template + CI/CD
    let cicd = resolve_cicd(&args, &config)?;
    let service = super::template_service(&config);
    let template_name = choose_template(&args, &config, &service)?;
    let template = service.resolve(&template_name, cicd)?;

    debug!(
        template = %template_name,
        cicd = %cicd,
        destination = %destination.display(),
        "new project resolved"
    );

    let generator = ProjectGenerator::new(template, &args.name, Box::new(LocalFilesystem::new()));

    // 3. Dry run: validate and describe, write nothing.
    if args.dry_run {
        generator.checker(&destination).check_all()?;
        return describe_plan(generator.template(), &args.name, &destination, &output);
    }

    // 4. Generate
    output.header(&format!("Creating '{}' from '{template_name}'...", args.name))?;
    info!(path = %destination.display(), "generation started");

    let report = generator.generate_template_at_destination(&destination)?;

    // 5. Summary
    report_success(&report, &args.name, &template_name, cicd, &global, &output)
}

/// `DIR/NAME`, with `DIR` defaulting to the current directory.
pub fn destination_for(output_dir: Option<&Path>, name: &str) -> PathBuf {
    output_dir.unwrap_or_else(|| Path::new(".")).join(name)
}

fn resolve_cicd(args: &NewArgs, config: &AppConfig) -> CliResult<CicdType> {
    if let Some(cicd) = args.cicd {
        return Ok(cicd.into());
    }
    match config.defaults.cicd.as_deref() {
        Some(value) => value
            .parse::<CicdType>()
            .map_err(|e: DomainError| CliError::ConfigError {
                message: format!("defaults.cicd: {e}"),
                source: Some(Box::new(e)),
            }),
        None => Ok(CicdType::None),
    }
}

/// Template name from `--template`, then `defaults.template`, then a prompt.
fn choose_template(
    args: &NewArgs,
    config: &AppConfig,
    service: &TemplateService,
) -> CliResult<String> {
    if let Some(name) = args.template.as_ref().or(config.defaults.template.as_ref()) {
        return Ok(name.clone());
    }

    let available = service.names()?;
    let can_prompt = !args.yes && std::io::stdin().is_terminal() && !available.is_empty();
    if can_prompt {
        return prompt_for_template(&available);
    }

    Err(CliError::NoTemplateSelected { available })
}

#[cfg(feature = "interactive")]
fn prompt_for_template(available: &[String]) -> CliResult<String> {
    use dialoguer::{Select, theme::ColorfulTheme};

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Template")
        .items(available)
        .default(0)
        .interact_opt()
        .map_err(|e| CliError::IoError {
            message: "template prompt failed".into(),
            source: std::io::Error::other(e),
        })?;

    selection
        .map(|index| available[index].clone())
        .ok_or(CliError::Cancelled)
}

#[cfg(not(feature = "interactive"))]
fn prompt_for_template(available: &[String]) -> CliResult<String> {
    Err(CliError::NoTemplateSelected {
        available: available.to_vec(),
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn describe_plan(
    template: &ProjectTemplate,
    name: &str,
    destination: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let plan = GenerationPlan::for_template(template);

    if out.format() == OutputFormat::Json {
        let steps: Vec<_> = plan
            .steps()
            .iter()
            .map(|step| {
                json!({
                    "layer": step.layer.as_str(),
                    "source": step.source,
                    "files_only": step.files_only,
                })
            })
            .collect();
        out.json(&json!({
            "dry_run": true,
            "project": name,
            "destination": destination,
            "steps": steps,
        }))?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{name}' at {}",
        destination.display()
    ))?;
    for step in plan.steps() {
        let scope = if step.files_only { " (files only)" } else { "" };
        out.print(&format!(
            "  {:<9} {}{scope}",
            step.layer.as_str(),
            step.source.display()
        ))?;
    }
    Ok(())
}

fn report_success(
    report: &GenerationReport,
    name: &str,
    template: &str,
    cicd: CicdType,
    global: &GlobalArgs,
    out: &OutputManager,
) -> CliResult<()> {
    info!(
        files = report.file_count(),
        rewritten = report.rewritten,
        "generation completed"
    );

    if out.format() == OutputFormat::Json {
        out.json(&json!({
            "project": name,
            "template": template,
            "cicd": cicd,
            "destination": report.destination,
            "files": report.file_count(),
            "rewritten": report.rewritten,
        }))?;
        return Ok(());
    }

    out.success(&format!(
        "Project '{name}' created ({} files)",
        report.file_count()
    ))?;

    if !global.quiet {
        out.print("")?;
        out.print("Next steps:")?;
        out.print(&format!("  cd {}", report.destination.display()))?;
        out.print("  python -m venv .venv && pip install -r requirements.txt")?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CicdArg;

    fn args(template: Option<&str>, cicd: Option<CicdArg>) -> NewArgs {
        NewArgs {
            name: "demo".into(),
            template: template.map(String::from),
            output: None,
            cicd,
            dry_run: false,
            yes: true,
        }
    }

    #[test]
    fn destination_defaults_to_cwd() {
        assert_eq!(destination_for(None, "my-app"), PathBuf::from("./my-app"));
        assert_eq!(
            destination_for(Some(Path::new("/tmp/out")), "my-app"),
            PathBuf::from("/tmp/out/my-app")
        );
    }

    #[test]
    fn cicd_flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.defaults.cicd = Some("azure".into());

        assert_eq!(
            resolve_cicd(&args(None, Some(CicdArg::Github)), &config).unwrap(),
            CicdType::GitHub
        );
        assert_eq!(
            resolve_cicd(&args(None, None), &config).unwrap(),
            CicdType::Azure
        );
        assert_eq!(
            resolve_cicd(&args(None, None), &AppConfig::default()).unwrap(),
            CicdType::None
        );
    }

    #[test]
    fn bad_configured_cicd_is_a_config_error() {
        let mut config = AppConfig::default();
        config.defaults.cicd = Some("jenkins".into());

        let err = resolve_cicd(&args(None, None), &config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn template_flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.defaults.template = Some("classic".into());
        let service = crate::commands::template_service(&config);

        assert_eq!(
            choose_template(&args(Some("rest-api"), None), &config, &service).unwrap(),
            "rest-api"
        );
        assert_eq!(
            choose_template(&args(None, None), &config, &service).unwrap(),
            "classic"
        );
    }

    #[test]
    fn no_template_without_prompt_lists_builtins() {
        let config = AppConfig::default();
        let service = crate::commands::template_service(&config);

        match choose_template(&args(None, None), &config, &service).unwrap_err() {
            CliError::NoTemplateSelected { available } => {
                assert!(available.contains(&"rest-api".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
