//! Implementation of the `stencil list` command.

use tracing::instrument;

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::template_service(&config);
    let templates = service.list()?;

    // `--output-format json` implies JSON unless a format was asked for.
    let format = match (args.format, output.format()) {
        (ListFormat::Table, OutputFormat::Json) => ListFormat::Json,
        (format, _) => format,
    };

    match format {
        ListFormat::Table => {
            output.header(&format!(
                "Available templates ({}):",
                service.root().display()
            ))?;
            let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
            for template in &templates {
                output.data(&format!(
                    "  {:<width$}  {}",
                    template.name,
                    template.path.display()
                ))?;
            }
        }

        ListFormat::List => {
            for template in &templates {
                output.data(&template.name)?;
            }
        }

        ListFormat::Json => output.json(&templates)?,

        ListFormat::Csv => {
            output.data("name,path")?;
            for template in &templates {
                output.data(&format!(
                    "{},{}",
                    csv_field(&template.name),
                    csv_field(&template.path.display().to_string())
                ))?;
            }
        }
    }

    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("rest-api"), "rest-api");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
