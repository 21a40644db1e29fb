use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use neurofocus_core::models::diagnosis::DiagnosisResult;
use neurofocus_core::models::record::ScreeningRecord;
use neurofocus_core::models::report::ReportDocument;
use neurofocus_export::assemble::assemble;
use neurofocus_export::renderer::{DocxRenderer, MarkdownRenderer, PdfRenderer, ReportRenderer};
use neurofocus_instruments::education::{all_modules, get_module};
use neurofocus_instruments::error::InstrumentError;
use neurofocus_instruments::session::AssessmentRun;
use neurofocus_instruments::{all_screeners, get_screener};
use neurofocus_storage::file::FileResultStore;
use neurofocus_storage::persist::{load_history, spawn_persist};

use crate::cli::{Cli, Command, ConfigArgs, TakeArgs};
use crate::config::{self, ExportFormat, NeuroFocusConfig};
use crate::input::{apply_answers, prompt_answers};

pub async fn run(cli: Cli) -> eyre::Result<()> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => config::config_dir()?,
    };
    let config = config::load_or_default_in(&config_dir)?;
    let data_dir = cli.data_dir.as_deref();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::List => list_screeners(&mut stdout),
        Command::Take(args) => take(args, &config, data_dir, &mut stdout).await,
        Command::History => show_history(&config, data_dir, &mut stdout).await,
        Command::Learn { id: None } => list_modules(&mut stdout),
        Command::Learn { id: Some(id) } => show_module(&id, &mut stdout),
        Command::Config(args) => configure(args, &config_dir, data_dir, config, &mut stdout),
    }
}

pub fn list_screeners<W: Write>(out: &mut W) -> eyre::Result<()> {
    for screener in all_screeners() {
        let profile = screener.profile();
        let badge = profile
            .badge
            .as_deref()
            .map(|b| format!(" [{b}]"))
            .unwrap_or_default();
        writeln!(
            out,
            "{:<10} {} ({}){badge}, {} questions",
            profile.id,
            profile.title,
            profile.subtitle,
            profile.questions.len()
        )?;
        writeln!(out, "           {}", profile.description)?;
    }
    Ok(())
}

/// Run a screener, print the result, then export and save it.
///
/// Export and history are side effects of a finished result: each one is
/// attempted regardless of the other and a failure in either is logged, not
/// returned.
pub async fn take<W: Write>(
    args: TakeArgs,
    config: &NeuroFocusConfig,
    data_dir: Option<&Path>,
    out: &mut W,
) -> eyre::Result<()> {
    let screener = get_screener(&args.screener)
        .ok_or_else(|| InstrumentError::UnknownScreener(args.screener.clone()))?;
    let profile = screener.profile();

    let mut run = AssessmentRun::start(profile)?;
    match &args.answers {
        Some(answers) => apply_answers(&mut run, answers)?,
        None => prompt_answers(&mut run, std::io::stdin().lock(), &mut *out)?,
    }

    let diagnosis = run.diagnosis()?;
    let report = assemble(profile, run.ledger(), &diagnosis);
    print_result(out, &diagnosis, &report)?;

    let persist = if args.no_save {
        None
    } else {
        match config.history_path(data_dir) {
            Ok(path) => {
                let store = Arc::new(FileResultStore::new(path));
                let record = ScreeningRecord::new(profile, &diagnosis, &report);
                Some(spawn_persist(store, record))
            }
            Err(e) => {
                warn!(error = %e, "no history location, result not saved");
                None
            }
        }
    };

    if let Some(path) = &args.export {
        let format = args.format.unwrap_or(config.export_format);
        match export_report(&report, path, format) {
            Ok(written) => writeln!(out, "\nReport written to {}", written.display())?,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "report export failed");
                writeln!(out, "\nReport could not be written: {e}")?;
            }
        }
    }

    if let Some(handle) = persist {
        if let Err(e) = handle.await {
            warn!(error = %e, "history task did not finish");
        }
    }
    Ok(())
}

pub fn print_result<W: Write>(
    out: &mut W,
    diagnosis: &DiagnosisResult,
    report: &ReportDocument,
) -> eyre::Result<()> {
    writeln!(out, "\n{} ({})", report.title, report.subtitle)?;
    writeln!(
        out,
        "Result: {} ({}/{})",
        report.result_category, diagnosis.score, diagnosis.max_score
    )?;
    writeln!(out, "{}", report.result_description)?;
    writeln!(out, "\nDomain breakdown:")?;
    for (line, insight) in report.insights.iter().zip(&diagnosis.insights) {
        writeln!(out, "  - {line}")?;
        writeln!(out, "    {}", insight.clinician_note)?;
    }
    Ok(())
}

/// Render `report` and write it to `path`, adding the format's extension
/// when the path has none. Returns the path written.
pub fn export_report(report: &ReportDocument, path: &Path, format: ExportFormat) -> eyre::Result<PathBuf> {
    let renderer: Box<dyn ReportRenderer> = match format {
        ExportFormat::Markdown => Box::new(MarkdownRenderer),
        ExportFormat::Docx => Box::new(DocxRenderer::default()),
        ExportFormat::Pdf => Box::new(PdfRenderer::default()),
    };

    let target = if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(renderer.file_extension())
    };

    let bytes = renderer.render(report)?;
    std::fs::write(&target, &bytes)
        .map_err(|e| eyre::eyre!("failed to write report to {}: {e}", target.display()))?;

    info!(path = %target.display(), bytes = bytes.len(), "report exported");
    Ok(target)
}

pub async fn show_history<W: Write>(
    config: &NeuroFocusConfig,
    data_dir: Option<&Path>,
    out: &mut W,
) -> eyre::Result<()> {
    let records = match config.history_path(data_dir) {
        Ok(path) => load_history(&FileResultStore::new(path)).await,
        Err(e) => {
            warn!(error = %e, "no history location, showing empty history");
            Vec::new()
        }
    };
    write_history(out, &records)
}

pub fn write_history<W: Write>(out: &mut W, records: &[ScreeningRecord]) -> eyre::Result<()> {
    if records.is_empty() {
        writeln!(out, "No completed screeners yet.")?;
        return Ok(());
    }

    for record in records {
        let date = record.completed_at.strftime("%Y-%m-%d %H:%M UTC");
        writeln!(
            out,
            "{date}  {:<22} {:<21} {}/{}",
            record.profile_title,
            record.diagnosis.category.label(),
            record.diagnosis.score,
            record.diagnosis.max_score
        )?;
    }
    Ok(())
}

pub fn list_modules<W: Write>(out: &mut W) -> eyre::Result<()> {
    for module in all_modules() {
        let tag = module
            .tag
            .as_deref()
            .map(|t| format!(" [{t}]"))
            .unwrap_or_default();
        writeln!(out, "{:<20} {}{tag}", module.id, module.title)?;
        writeln!(out, "                     {}", module.subtitle)?;
    }
    Ok(())
}

pub fn show_module<W: Write>(id: &str, out: &mut W) -> eyre::Result<()> {
    let module = get_module(id).ok_or_else(|| InstrumentError::UnknownModule(id.to_string()))?;
    writeln!(out, "# {}\n", module.title)?;
    writeln!(out, "_{}_\n", module.subtitle)?;
    writeln!(out, "{}", module.body())?;
    Ok(())
}

pub fn configure<W: Write>(
    args: ConfigArgs,
    config_dir: &Path,
    data_dir: Option<&Path>,
    mut config: NeuroFocusConfig,
    out: &mut W,
) -> eyre::Result<()> {
    let mut changed = false;
    if let Some(dir) = args.set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }
    if let Some(format) = args.set_export_format {
        config.export_format = format;
        changed = true;
    }
    if changed {
        config::save_config_in(config_dir, &config)?;
    }

    let history = match config.history_path(data_dir) {
        Ok(path) => path.display().to_string(),
        Err(e) => format!("unavailable ({e})"),
    };
    writeln!(out, "config file:   {}", config::config_path_in(config_dir).display())?;
    writeln!(out, "history file:  {history}")?;
    writeln!(out, "export format: {:?}", config.export_format)?;
    writeln!(out, "created at:    {}", config.created_at)?;
    Ok(())
}
