mod definition;

use anyhow::Context;
use clap::Parser;
use definition::PluginDefinition;
use pluginyml_core::logging::{format_error_chain, init_logging};
use pluginyml_core::{GeneratorConfig, ManifestWriter};
use pluginyml_nukkit::{project, PluginDescriptor, ProjectorOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// Generate a Nukkit plugin.yml from a JSON plugin definition.
#[derive(Debug, Parser)]
#[command(name = "pluginyml-gen", version)]
struct Cli {
    /// JSON file describing the plugin
    #[arg(short, long)]
    definition: PathBuf,

    /// Generator config (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overrides the config
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Fail when name, main or version is missing
    #[arg(long)]
    strict: bool,

    /// Print the manifest instead of writing it
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            init_logging("info");
            error!(error = %format_error_chain(&*err), "plugin.yml generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig::load_or_default(cli.config.as_deref())
        .context("failed to load generator config")?;
    init_logging(config.logging.level.as_deref().unwrap_or("info"));

    let data = fs::read_to_string(&cli.definition)
        .with_context(|| format!("failed to read {}", cli.definition.display()))?;
    let definition: PluginDefinition = serde_json::from_str(&data)
        .with_context(|| format!("invalid plugin definition {}", cli.definition.display()))?;

    let descriptor = build_descriptor(&definition, &config)?;
    let document = project(&descriptor, projector_options(&cli, &config))?;

    if cli.print {
        print!("{}", document.to_yaml_string()?);
        return Ok(());
    }

    let path = manifest_writer(&cli, &config).write(&document)?;
    info!(
        path = %path.display(),
        commands = descriptor.commands().len(),
        permissions = descriptor.permissions().len(),
        "generated"
    );
    Ok(())
}

/// Definition first, then project metadata for whatever it left unset.
fn build_descriptor(
    definition: &PluginDefinition,
    config: &GeneratorConfig,
) -> anyhow::Result<PluginDescriptor> {
    let mut descriptor = PluginDescriptor::new();
    definition
        .apply(&mut descriptor)
        .context("failed to configure plugin descriptor")?;
    descriptor.apply_project_defaults(&config.project);
    Ok(descriptor)
}

fn projector_options(cli: &Cli, config: &GeneratorConfig) -> ProjectorOptions {
    ProjectorOptions {
        require_fields: cli.strict || config.validation.require_fields,
    }
}

/// `--out` replaces the configured directory; the file name always comes
/// from the config.
fn manifest_writer(cli: &Cli, config: &GeneratorConfig) -> ManifestWriter {
    let mut output = config.output.clone();
    if let Some(dir) = &cli.out {
        output.directory = Some(dir.clone());
    }
    ManifestWriter::from_config(&output, Path::new("."))
}
