// File: crates/candlechart-demo/src/main.rs
// Summary: CLI that loads an OHLCV CSV and renders it as a candlestick chart image.

use anyhow::{bail, Context, Result};
use candlechart_core::theme;
use candlechart_core::{render, ImageFormat, RenderConfig, Sample, Series};
use clap::Parser;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "candlechart", version, about = "Render OHLCV candles from a CSV file to PNG or JPEG")]
struct Args {
    /// OHLCV CSV with a header row (time, open, high, low, close, volume)
    input: PathBuf,

    /// Output file; defaults to target/out/<stem>.<ext>
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long, default_value = "TICKER")]
    ticker: String,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "USD")]
    currency: String,

    #[arg(long, default_value = "1m")]
    interval: String,

    /// Theme preset: light or dark
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long, default_value_t = 720)]
    width: i32,

    #[arg(long, default_value_t = 480)]
    height: i32,

    /// Encode as JPEG at this quality instead of PNG
    #[arg(long)]
    jpeg: Option<u32>,

    /// Height share of a volume panel, e.g. 0.25
    #[arg(long)]
    volume: Option<f32>,

    /// Seconds between labeled time ticks
    #[arg(long, default_value_t = 3600)]
    delta: i64,

    /// Label time zone as seconds east of UTC
    #[arg(long, default_value_t = 3 * 3600, allow_hyphen_values = true)]
    utc_offset: i32,

    #[arg(long, default_value = "%H:%M")]
    time_format: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = resolve_path(&args.input)?;
    let samples = load_ohlcv_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if samples.is_empty() {
        bail!("no candles loaded from {}; check headers/delimiter", path.display());
    }
    info!("loaded {} candles from {}", samples.len(), path.display());

    let name = if args.name.is_empty() { args.ticker.clone() } else { args.name.clone() };
    let series = Series::new(&args.ticker, name, &args.currency, &args.interval, samples);

    let mut config = RenderConfig::default()
        .with_size(args.width, args.height)
        .with_theme(theme::find(&args.theme));
    if let Some(quality) = args.jpeg {
        config = config.with_format(ImageFormat::Jpeg { quality });
    }
    if let Some(fraction) = args.volume {
        config = config.with_volume_panel(fraction);
    }
    config.time.delta = args.delta;
    config.time.utc_offset_secs = args.utc_offset;
    config.time.format = args.time_format.clone();
    debug!("config: {config:?}");

    let bytes = render(&series, &config)?;
    let out = args.out.clone().unwrap_or_else(|| out_name(&path, config.format));
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(&out, &bytes).with_context(|| format!("writing {}", out.display()))?;
    info!("wrote {} ({} bytes)", out.display(), bytes.len());
    println!("{}", out.display());
    Ok(())
}

/// Resolve path, trying a .csv/.cvs swap if needed.
fn resolve_path(p: &Path) -> Result<PathBuf> {
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p).filter(|alt| alt.exists()) {
        warn!("{} not found, using {}", p.display(), alt.display());
        return Ok(alt);
    }
    bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let swapped = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(swapped))
}

/// target/out/chart_<stem>.<ext>
fn out_name(input: &Path, format: ImageFormat) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.{}", format.extension()))
}

/// Load an OHLCV CSV into samples sorted by time. Rows that fail to parse or
/// violate low <= open,close <= high are skipped with a warning.
fn load_ohlcv_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    debug!("headers: {headers:?}");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v"]);

    let (Some(i_time), Some(i_open), Some(i_high), Some(i_low), Some(i_close)) = (i_time, i_open, i_high, i_low, i_close)
    else {
        bail!("need time/open/high/low/close columns, found {headers:?}");
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let Some(t) = rec.get(i_time).and_then(parse_epoch_secs) else {
            warn!("row {row}: unreadable time, skipped");
            continue;
        };
        let (Some(o), Some(h), Some(l), Some(c)) = (num(i_open), num(i_high), num(i_low), num(i_close)) else {
            warn!("row {row}: unreadable prices, skipped");
            continue;
        };
        let v = i_volume.and_then(num).unwrap_or(0.0);
        match Sample::try_new(t, o, h, l, c, v) {
            Ok(s) => out.push(s),
            Err(e) => warn!("row {row}: {e}, skipped"),
        }
    }
    out.sort_by_key(|s| s.timestamp);
    Ok(out)
}

fn parse_epoch_secs(s: &str) -> Option<i64> {
    let n = s.trim().parse::<i64>().ok()?;
    // epoch ms -> sec
    if n > 10_i64.pow(12) {
        return Some(n / 1000);
    }
    Some(n)
}
