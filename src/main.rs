//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run the digest.
//! No business logic here; the pipeline lives in DigestService.

use anyhow::Context;
use dotenv::dotenv;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tg_digest::adapters::export::{FsExportReader, RegexHtmlParser};
use tg_digest::adapters::report::FsReportWriter;
use tg_digest::adapters::ui::progress::topic_progress;
use tg_digest::adapters::ui::tui::TuiTopicInput;
use tg_digest::domain::ReportStandards;
use tg_digest::ports::{ExportReader, MessageBlockParser, ReportPort, TopicInputPort};
use tg_digest::shared::config::AppConfig;
use tg_digest::usecases::{CorpusScanner, DigestService, ReportValidator, TopicExtractor};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let standards = ReportStandards::default();
    tg_digest::adapters::ui::init_ui(&standards);

    let files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if files.is_empty() {
        println!("Usage: tg-digest <messages.html>...");
        return Ok(());
    }

    let cfg = AppConfig::load().context("failed to load configuration")?;

    // --- Topics: config first, then interactive prompt ---
    let mut topics = cfg.validated_topics()?;
    if topics.is_empty() && cfg.interactive_or_default() && std::io::stdin().is_terminal() {
        let input: Arc<dyn TopicInputPort> = Arc::new(TuiTopicInput::new());
        topics = input.request_topics()?;
    }
    if topics.is_empty() {
        warn!("no topics defined; only corpus counts will be reported");
    }

    // --- Adapters ---
    let reader: Arc<dyn ExportReader> = Arc::new(FsExportReader::new());
    let parser: Arc<dyn MessageBlockParser> = Arc::new(RegexHtmlParser::new());
    let report: Option<Arc<dyn ReportPort>> = cfg.report_dir.as_deref().map(|dir| {
        info!(path = %dir, "report directory");
        Arc::new(FsReportWriter::new(dir)) as Arc<dyn ReportPort>
    });

    // --- Services ---
    let digest_service = DigestService::new(
        CorpusScanner::new(Arc::clone(&reader), Arc::clone(&parser)),
        TopicExtractor::new(reader, parser),
        ReportValidator::new(standards),
        report,
    )
    .with_title(cfg.report_title_or_default())
    .with_progress(topic_progress(cfg.progress_or_default()));

    // --- Run ---
    let outcome = digest_service.run(files.as_slice(), &topics)?;

    for skipped in &outcome.skipped {
        warn!(path = %skipped.path.display(), reason = %skipped.reason, "file skipped");
    }
    for path in &outcome.written {
        println!("Report written: {}", path.display());
    }
    info!(
        passed = outcome.digest.passed,
        violations = outcome.violations.len(),
        skipped = outcome.skipped.len(),
        "digest complete"
    );

    Ok(())
}
