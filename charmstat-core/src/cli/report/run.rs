use crate::cli::report::ReportArgs;
use crate::conf::ReportConfig;
use crate::reader::LogReader;
use crate::stats::StatsAggregator;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

pub fn run_report(args: &ReportArgs, out: &mut impl Write) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };
    debug!(?cfg, "loaded report config");

    let pattern = cfg.compile_pattern()?;
    let mut reader = LogReader::open(&args.file, &pattern, args.charm.clone())?;

    let mut agg = StatsAggregator::new();
    let observed = agg.observe_batch(reader.by_ref())?;

    info!(
        observed,
        skipped = reader.skipped(),
        charms = agg.charm_count(),
        "processed log file"
    );

    writeln!(out, "{}", agg.render(&cfg.render_options()))?;
    Ok(())
}
