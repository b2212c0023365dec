//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use nereus_correct::CorrectionConfig;
use nereus_io::{Compression, ReaderConfig, WriterConfig};
use nereus_spectral::{
    DaniellKernel, Estimator, KernelKind, PeriodogramConfig, WelchConfig, Window,
};
use nereus_wavestats::{SpectralStatsConfig, ZeroCrossingConfig};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Parses a taper window name into the corresponding enum variant.
pub fn parse_window(s: &str) -> Result<Window> {
    match s.to_lowercase().as_str() {
        "hamming" => Ok(Window::Hamming),
        "hann" | "hanning" => Ok(Window::Hann),
        "rectangular" | "boxcar" => Ok(Window::Rectangular),
        other => bail!("unknown window: {other:?}"),
    }
}

/// Parses a smoothing kernel family name into the corresponding enum variant.
pub fn parse_kernel_kind(s: &str) -> Result<KernelKind> {
    match s.to_lowercase().as_str() {
        "daniell" => Ok(KernelKind::Daniell),
        "modified" | "modified_daniell" => Ok(KernelKind::ModifiedDaniell),
        other => bail!("unknown kernel kind: {other:?}"),
    }
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> ReaderConfig {
    let cfg = ReaderConfig::default().with_column(&io.column);
    match io.sample_rate {
        Some(fs) => cfg.with_sample_rate(fs),
        None => cfg,
    }
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    let cfg = WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`CorrectionConfig`] from the TOML correction configuration.
///
/// `zpt_override` (from the command line) takes precedence over the file.
pub fn build_correction_config(
    correction: &CorrectionToml,
    zpt_override: Option<f64>,
) -> Result<CorrectionConfig> {
    let Some(zpt) = zpt_override.or(correction.zpt) else {
        bail!("no sensor height: set [correction].zpt in config or use --zpt");
    };
    let cfg = CorrectionConfig::new(zpt)
        .with_band(correction.fmin, correction.fmax)
        .with_max_gain(correction.max_gain)
        .with_gravity(correction.gravity);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds an [`Estimator`] from the TOML spectral configuration.
pub fn build_estimator(spectral: &SpectralToml) -> Result<Estimator> {
    let estimator = match spectral.method.to_lowercase().as_str() {
        "welch" => Estimator::Welch(
            WelchConfig::new(spectral.segments)
                .with_overlap(spectral.overlap)
                .with_window(parse_window(&spectral.window)?),
        ),
        "periodogram" => {
            let kind = parse_kernel_kind(&spectral.kernel_kind)?;
            let kernel = DaniellKernel::new(kind, &spectral.kernel)?;
            Estimator::Periodogram(PeriodogramConfig::new(kernel).with_taper(spectral.taper))
        }
        other => bail!("unknown spectral method: {other:?}"),
    };
    estimator.validate()?;
    Ok(estimator)
}

/// Builds a [`SpectralStatsConfig`] from the TOML spectral configuration.
pub fn build_spectral_stats_config(spectral: &SpectralToml) -> Result<SpectralStatsConfig> {
    let cfg = SpectralStatsConfig::new(build_estimator(spectral)?)
        .with_window(spectral.min_freq, spectral.max_freq);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`ZeroCrossingConfig`] from the TOML zero-crossing configuration.
pub fn build_zero_crossing_config(zc: &ZeroCrossingToml) -> Result<ZeroCrossingConfig> {
    let cfg = match zc.threshold {
        Some(t) => ZeroCrossingConfig::new().with_threshold(t),
        None => ZeroCrossingConfig::new(),
    };
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_names() {
        assert_eq!(parse_compression("ZSTD").unwrap(), Compression::Zstd);
        assert_eq!(parse_compression("none").unwrap(), Compression::None);
        assert!(parse_compression("lz4").is_err());
    }

    #[test]
    fn window_names() {
        assert_eq!(parse_window("hann").unwrap(), Window::Hann);
        assert_eq!(parse_window("Hamming").unwrap(), Window::Hamming);
        assert!(parse_window("kaiser").is_err());
    }

    #[test]
    fn default_estimator_is_welch() {
        let est = build_estimator(&SpectralToml::default()).unwrap();
        assert_eq!(est, Estimator::Welch(WelchConfig::new(4)));
    }

    #[test]
    fn periodogram_estimator() {
        let toml = SpectralToml {
            method: "periodogram".to_string(),
            kernel: vec![3, 3],
            kernel_kind: "modified".to_string(),
            ..SpectralToml::default()
        };
        match build_estimator(&toml).unwrap() {
            Estimator::Periodogram(cfg) => {
                assert_eq!(cfg.kernel().kind(), KernelKind::ModifiedDaniell);
                assert_eq!(cfg.kernel().half_widths(), &[3, 3]);
            }
            other => panic!("unexpected estimator: {other:?}"),
        }
    }

    #[test]
    fn unknown_method_rejected() {
        let toml = SpectralToml {
            method: "burg".to_string(),
            ..SpectralToml::default()
        };
        assert!(build_estimator(&toml).is_err());
    }

    #[test]
    fn zpt_override_wins() {
        let toml = CorrectionToml {
            zpt: Some(0.2),
            ..CorrectionToml::default()
        };
        let cfg = build_correction_config(&toml, Some(0.6)).unwrap();
        assert_eq!(cfg.zpt(), 0.6);
    }

    #[test]
    fn missing_zpt_rejected() {
        let err = build_correction_config(&CorrectionToml::default(), None).unwrap_err();
        assert!(err.to_string().contains("--zpt"));
    }

    #[test]
    fn invalid_band_rejected() {
        let toml = CorrectionToml {
            zpt: Some(0.2),
            fmin: 0.4,
            ..CorrectionToml::default()
        };
        assert!(build_correction_config(&toml, None).is_err());
    }

    #[test]
    fn reader_config_carries_rate() {
        let io = IoToml {
            sample_rate: Some(4.0),
            ..IoToml::default()
        };
        let cfg = build_reader_config(&io);
        assert_eq!(cfg.column(), "depth");
        assert_eq!(cfg.sample_rate(), Some(4.0));
    }

    #[test]
    fn negative_threshold_rejected() {
        let zc = ZeroCrossingToml {
            threshold: Some(-0.5),
        };
        assert!(build_zero_crossing_config(&zc).is_err());
    }
}
