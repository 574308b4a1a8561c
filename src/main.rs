use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use divorce_templates::adapters::{LocalFileRenderer, RecordingDocumentRenderer, SystemClock};
use divorce_templates::application::template_content::{
    CommonContent, HoldingPeriodService, MapperRegistry, TemplateCatalog,
};
use divorce_templates::application::{
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
};
use divorce_templates::config::{AppConfig, ConfigError, ValidationError};
use divorce_templates::domain::case::CaseData;
use divorce_templates::domain::foundation::{CaseId, LanguagePreference, Party};
use divorce_templates::domain::template::DocumentType;
use divorce_templates::ports::DocumentRenderer;
use divorce_templates::telemetry::{self, TelemetryError};
use thiserror::Error;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "divorce-templates",
    about = "Produce template content for divorce and dissolution case documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every document type with its English and Welsh template ids
    List,
    /// Map a case to template content for one document
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Path to the case data JSON
    #[arg(long)]
    case: PathBuf,
    /// Case reference, with or without dashes
    #[arg(long)]
    case_id: CaseId,
    /// Document type, e.g. notice_of_proceedings_applicant
    #[arg(long)]
    document: DocumentType,
    /// Party the document is addressed to
    #[arg(long, default_value = "applicant1")]
    recipient: Party,
    /// Write the rendering payload instead of printing the content
    #[arg(long)]
    write: bool,
    /// Directory payloads are written under (defaults to the configured output directory)
    #[arg(long, requires = "write")]
    out: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("failed to read case file {path}: {source}")]
    ReadCase {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Generate(#[from] GenerateDocumentError),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("divorce-templates error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    match cli.command {
        Command::List => {
            list(&config);
            Ok(())
        }
        Command::Preview(args) => preview(&config, args).await,
    }
}

fn list(config: &AppConfig) {
    let catalog = TemplateCatalog::new(config.templates.prefix.clone());
    for document_type in DocumentType::all() {
        println!(
            "{:<36} {}  {}",
            document_type.as_str(),
            catalog.template_id(*document_type, LanguagePreference::English),
            catalog.template_id(*document_type, LanguagePreference::Welsh),
        );
    }
}

async fn preview(config: &AppConfig, args: PreviewArgs) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(&args.case).map_err(|source| CliError::ReadCase {
        path: args.case.clone(),
        source,
    })?;
    let case_data: CaseData = serde_json::from_str(&raw)?;

    let registry = MapperRegistry::standard(
        CommonContent::new(config.contact.clone()),
        HoldingPeriodService::new(config.timings.clone()),
    );
    let renderer: Arc<dyn DocumentRenderer> = if args.write {
        let directory = args
            .out
            .clone()
            .unwrap_or_else(|| config.output.directory.clone());
        Arc::new(LocalFileRenderer::new(directory))
    } else {
        Arc::new(RecordingDocumentRenderer::new())
    };
    let handler = GenerateDocumentHandler::new(
        Arc::new(registry),
        TemplateCatalog::new(config.templates.prefix.clone()),
        renderer,
        Arc::new(SystemClock),
    );

    let cmd = GenerateDocumentCommand::new(args.case_id, case_data, args.document)
        .to(args.recipient);

    if args.write {
        let generated = handler.handle(cmd).await?;
        info!(keys = generated.key_count, "Payload written");
        println!("{}", generated.location);
    } else {
        let preview = handler.preview(&cmd)?;
        println!("{}", serde_json::to_string_pretty(&preview.content)?);
        info!(template_id = %preview.template_id, "Previewed template content");
    }
    Ok(())
}
