//! Correct command: compensate depth attenuation of a single record.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nereus_correct::pr_corr;
use nereus_io::{read_series, write_series};

use crate::cli::CorrectArgs;
use crate::convert;

/// Read a record, apply the attenuation correction and write the result.
pub fn run(args: CorrectArgs) -> Result<()> {
    let _cmd = info_span!("correct").entered();
    let config = crate::load_config(&args.config)?;

    let reader_cfg = convert::build_reader_config(&config.io);
    let writer_cfg = convert::build_writer_config(&config.io)?;
    let correction_cfg = convert::build_correction_config(&config.correction, args.zpt)?;

    info!(path = %args.input.display(), "reading record");
    let series = read_series(&args.input, &reader_cfg)
        .with_context(|| format!("failed to read Parquet: {}", args.input.display()))?;
    info!(
        samples = series.len(),
        sample_rate = series.sample_rate(),
        mean_depth = series.mean(),
        "record loaded"
    );

    let corrected = pr_corr(&series, &correction_cfg).context("attenuation correction failed")?;

    write_series(&args.output, reader_cfg.column(), &corrected, &writer_cfg)
        .with_context(|| format!("failed to write Parquet: {}", args.output.display()))?;
    info!(path = %args.output.display(), "corrected record written");

    Ok(())
}
