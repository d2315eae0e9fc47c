use crate::model::RtPeak;

// ---------------------------------------------------------------------------
// Retention-time peak-list codec
// ---------------------------------------------------------------------------

/// Parse a `|`-delimited peak list into retention-time/intensity pairs.
///
/// Each record holds two `;`-separated fields, `(rt, intensity)`, with
/// insignificant whitespace around either. Records whose fields do not parse
/// to finite numbers are silently dropped; this parser filters, it never
/// fails. The result is sorted ascending by `rt` (stable, so exact-tie order
/// is deterministic).
///
/// ```
/// use specmatch::parse_rt_intensity_pairs;
///
/// let points = parse_rt_intensity_pairs("2.0;5|1.0;3");
/// assert_eq!(points[0].rt, 1.0);
/// assert_eq!(points[1].intensity, 5.0);
/// ```
pub fn parse_rt_intensity_pairs(raw: &str) -> Vec<RtPeak> {
    let mut points: Vec<RtPeak> = raw
        .trim()
        .split('|')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .filter_map(|chunk| {
            let mut fields = chunk.split(';');
            let rt = parse_finite(fields.next()?)?;
            let intensity = parse_finite(fields.next()?)?;
            Some(RtPeak { rt, intensity })
        })
        .collect();

    points.sort_by(|a, b| a.rt.total_cmp(&b.rt));
    points
}

/// Strict field parse: trimmed decimal number, finite or nothing.
fn parse_finite(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Serialize peaks to CSV: a `rt,intensity` header then one row per peak in
/// the given order (no re-sorting), newline-joined without a trailing
/// newline.
pub fn to_peak_csv(rows: &[RtPeak]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["rt", "intensity"])
        .expect("in-memory CSV write");
    for row in rows {
        writer
            .write_record([row.rt.to_string(), row.intensity.to_string()])
            .expect("in-memory CSV write");
    }

    let bytes = writer.into_inner().expect("in-memory CSV flush");
    let mut text = String::from_utf8(bytes).expect("CSV output is UTF-8");
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
