use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use specmatch::{cosine_similarity_tolerance, mirror_series, parse_spectrum, Peak};

fn main() -> Result<()> {
    env_logger::init();

    let mut paths: Vec<PathBuf> = Vec::new();
    let mut tolerance = 0.01;
    let mut emit_mirror = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tolerance" => {
                let value = args.next().context("--tolerance needs a value")?;
                tolerance = value
                    .parse()
                    .with_context(|| format!("invalid tolerance '{value}'"))?;
            }
            "--mirror" => emit_mirror = true,
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    let [query_path, reference_path] = <[PathBuf; 2]>::try_from(paths).map_err(|_| {
        anyhow!("usage: mirror_compare <query> <reference> [--tolerance T] [--mirror]")
    })?;

    let query = read_spectrum(&query_path)?;
    let reference = read_spectrum(&reference_path)?;
    log::info!(
        "query: {} peaks, reference: {} peaks, tolerance: {tolerance}",
        query.len(),
        reference.len()
    );

    let score = cosine_similarity_tolerance(&query, &reference, tolerance);
    println!("similarity: {score:.4}");

    if emit_mirror {
        let series = mirror_series(&query, &reference);
        println!("{}", serde_json::to_string_pretty(&series)?);
    }

    Ok(())
}

/// Read a `|`/`;` peak-list file. Parsing never fails, so an empty result
/// only gets a warning.
fn read_spectrum(path: &Path) -> Result<Vec<Peak>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let peaks = parse_spectrum(&text);
    if peaks.is_empty() {
        log::warn!("{}: no parseable peaks", path.display());
    }
    Ok(peaks)
}
