//! Stats command: spectral and zero-crossing statistics for many records.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use tracing::{info, info_span, warn};

use nereus_correct::{CorrectionConfig, pr_corr};
use nereus_io::{
    Outcome, ReaderConfig, RecordSummary, SpectralSummary, StatsReport, WriterConfig,
    ZeroCrossingSummary, read_series, to_json, write_spectrum,
};
use nereus_spectral::SpectrumEstimate;
use nereus_wavestats::{
    SpectralStatsConfig, StatsObserver, ZeroCrossingConfig, wave_stats_sp_observed, wave_stats_zc,
};

use crate::cli::StatsArgs;
use crate::convert;

/// Keeps the spectrum produced by the spectral analysis.
#[derive(Default)]
struct SpectrumCapture {
    spectrum: Option<SpectrumEstimate>,
}

impl StatsObserver for SpectrumCapture {
    fn on_spectrum(&mut self, spectrum: &SpectrumEstimate, _peak_period: f64) {
        self.spectrum = Some(spectrum.clone());
    }
}

/// Everything a single record needs, shared read-only across workers.
struct Pipeline {
    reader: ReaderConfig,
    writer: WriterConfig,
    correction: Option<CorrectionConfig>,
    spectral: SpectralStatsConfig,
    zero_crossing: ZeroCrossingConfig,
    spectrum_dir: Option<PathBuf>,
}

/// Analyse every input record in parallel and write a JSON report.
pub fn run(args: StatsArgs) -> Result<()> {
    let _cmd = info_span!("stats").entered();
    let config = crate::load_config(&args.config)?;

    let correction = if args.no_correct {
        None
    } else {
        Some(convert::build_correction_config(&config.correction, args.zpt)?)
    };
    let pipeline = Pipeline {
        reader: convert::build_reader_config(&config.io),
        writer: convert::build_writer_config(&config.io)?,
        correction,
        spectral: convert::build_spectral_stats_config(&config.spectral)?,
        zero_crossing: convert::build_zero_crossing_config(&config.zero_crossing)?,
        spectrum_dir: args.spectrum_dir.or(config.io.spectrum_dir),
    };

    if let Some(dir) = &pipeline.spectrum_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create spectrum directory: {}", dir.display()))?;
    }

    info!(records = args.input.len(), "analysing records");
    let reports = args
        .input
        .par_iter()
        .map(|path| analyse(path, &pipeline))
        .collect::<Result<Vec<_>>>()?;

    let failed = reports.iter().filter(|r| r.is_failed()).count();
    if failed == reports.len() {
        bail!("no statistics could be computed for any of the {failed} record(s)");
    }

    let json = to_json(&reports).context("failed to serialise report")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn analyse(path: &Path, pipeline: &Pipeline) -> Result<StatsReport> {
    let _record = info_span!("record", path = %path.display()).entered();

    let mut series = read_series(path, &pipeline.reader)
        .with_context(|| format!("failed to read Parquet: {}", path.display()))?;
    if let Some(correction) = &pipeline.correction {
        series = pr_corr(&series, correction)
            .with_context(|| format!("attenuation correction failed: {}", path.display()))?;
    }

    let mut capture = SpectrumCapture::default();
    let spectral = wave_stats_sp_observed(&series, &pipeline.spectral, &mut capture);
    let zero_crossing = wave_stats_zc(&series, &pipeline.zero_crossing);
    if let Err(e) = &spectral {
        warn!(kind = ?e.kind(), "spectral statistics failed: {e}");
    }
    if let Err(e) = &zero_crossing {
        warn!(kind = ?e.kind(), "zero-crossing statistics failed: {e}");
    }

    if let (Some(dir), Some(spectrum)) = (&pipeline.spectrum_dir, &capture.spectrum) {
        let target = spectrum_path(dir, path);
        write_spectrum(&target, spectrum, &pipeline.writer)
            .with_context(|| format!("failed to write spectrum: {}", target.display()))?;
    }

    Ok(StatsReport {
        source: RecordSummary {
            path: path.display().to_string(),
            samples: series.len(),
            sample_rate: series.sample_rate(),
            duration_s: series.duration(),
            corrected: pipeline.correction.is_some(),
        },
        spectral: Outcome::from(spectral.map(SpectralSummary::from)),
        zero_crossing: Outcome::from(zero_crossing.map(ZeroCrossingSummary::from)),
    })
}

/// `dir/<stem>.spectrum.parquet` for an input record.
fn spectrum_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "record".to_string());
    dir.join(format!("{stem}.spectrum.parquet"))
}
