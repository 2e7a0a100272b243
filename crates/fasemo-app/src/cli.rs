use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// Fasemo: a horizontal strip of side-by-side content panes.
///
/// Opens the startup panes, replays a JSON script of interactions and
/// prints the resulting layout as JSON.
#[derive(Parser, Debug)]
#[command(name = "fasemo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `fasemo=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Visible strip area as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x800")]
    pub viewport: Viewport,

    /// JSON file with a list of interaction steps to replay.
    #[arg(long)]
    pub script: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |v: &str| -> Result<f64, String> {
            match v.trim().parse::<f64>() {
                Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
                _ => Err(format!("invalid viewport dimension '{v}'")),
            }
        };
        Ok(Self {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["fasemo"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.script.is_none());
        assert_eq!(
            args.viewport,
            Viewport {
                width: 1280.0,
                height: 800.0
            }
        );
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "fasemo",
            "--config",
            "/tmp/c.toml",
            "--log-level",
            "fasemo=trace",
            "--viewport",
            "1000x600",
            "--script",
            "steps.json",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.log_level.as_deref(), Some("fasemo=trace"));
        assert_eq!(args.viewport.to_string(), "1000x600");
        assert_eq!(args.script, Some(PathBuf::from("steps.json")));
    }

    #[test]
    fn bad_viewport_is_rejected() {
        assert!("1000".parse::<Viewport>().is_err());
        assert!("0x600".parse::<Viewport>().is_err());
        assert!("wide x tall".parse::<Viewport>().is_err());
        assert!(Args::try_parse_from(["fasemo", "--viewport", "big"]).is_err());
    }
}
