use crate::model::Peak;

// ---------------------------------------------------------------------------
// Spectrum parsing
// ---------------------------------------------------------------------------

/// Parse a `|`-delimited peak list into mass/intensity peaks, sorted
/// ascending by m/z.
///
/// Same grammar as [`crate::peaks::parse_rt_intensity_pairs`] but with
/// `(mz, intensity)` fields and a deliberately looser number parse: each
/// field is read as a leading decimal-number prefix, ignoring trailing
/// non-numeric characters, so instrument exports with unit suffixes still
/// load. A record is skipped when it has fewer than two fields or a field
/// has no leading number at all.
///
/// ```
/// use specmatch::parse_spectrum;
///
/// let peaks = parse_spectrum("100.0;50|100.0;bad|50.0;20");
/// assert_eq!(peaks.len(), 2);
/// assert_eq!(peaks[0].mz, 50.0);
/// ```
pub fn parse_spectrum(text: &str) -> Vec<Peak> {
    let mut peaks = Vec::new();

    for part in text.split('|') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let fields: Vec<&str> = part.split(';').collect();
        if fields.len() < 2 {
            continue;
        }

        if let (Some(mz), Some(intensity)) =
            (parse_float_prefix(fields[0]), parse_float_prefix(fields[1]))
        {
            peaks.push(Peak { mz, intensity });
        }
    }

    peaks.sort_by(|a, b| a.mz.total_cmp(&b.mz));
    peaks
}

/// Leading-prefix float parse: optional sign, digits with at most one
/// decimal point, optional exponent, or signed `Infinity`. Trailing
/// non-numeric characters are ignored; `None` only when no number leads the
/// field.
fn parse_float_prefix(field: &str) -> Option<f64> {
    let s = field.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let mut saw_digit = false;
    while matches!(bytes.get(end), Some(b'0'..=b'9')) {
        end += 1;
        saw_digit = true;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while matches!(bytes.get(end), Some(b'0'..=b'9')) {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }

    // Exponent is only consumed when it is complete; "1e" parses as 1.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let mut saw_exp_digit = false;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
            saw_exp_digit = true;
        }
        if saw_exp_digit {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

// ---------------------------------------------------------------------------
// Tolerance cosine similarity
// ---------------------------------------------------------------------------

/// Modified cosine similarity between two spectra under an m/z tolerance
/// window, via greedy one-to-one peak matching.
///
/// Peaks of `a` claim partners in descending intensity order; each claims
/// the unclaimed peak of `b` within `|Δmz| ≤ tolerance` with the highest
/// intensity (first such candidate wins ties). The matched intensity
/// products are summed and divided by the product of the full intensity
/// norms, so the score is in `[0, 1]` for non-negative intensities.
///
/// The greedy strategy is part of the output contract: it is deterministic,
/// but intentionally not an optimal assignment, and not necessarily
/// symmetric in its arguments for tie-heavy inputs.
///
/// Degenerate inputs score `0`: either spectrum empty, either intensity norm
/// zero. A `tolerance` of `0` demands exact m/z equality; a negative or NaN
/// tolerance makes the window test always false, also scoring `0`.
pub fn cosine_similarity_tolerance(a: &[Peak], b: &[Peak], tolerance: f64) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let norm_a: f64 = a.iter().map(|p| p.intensity * p.intensity).sum();
    let norm_b: f64 = b.iter().map(|p| p.intensity * p.intensity).sum();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Local intensity-ranked views; the m/z-sorted inputs stay untouched.
    let mut ranked_a = a.to_vec();
    ranked_a.sort_by(|x, y| y.intensity.total_cmp(&x.intensity));
    let mut ranked_b = b.to_vec();
    ranked_b.sort_by(|x, y| y.intensity.total_cmp(&x.intensity));

    let mut claimed = vec![false; ranked_b.len()];
    let mut dot = 0.0;

    for peak_a in &ranked_a {
        let mut best_index = None;
        let mut best_intensity = -1.0;

        for (index, peak_b) in ranked_b.iter().enumerate() {
            if claimed[index] {
                continue;
            }
            if (peak_a.mz - peak_b.mz).abs() <= tolerance && peak_b.intensity > best_intensity {
                best_intensity = peak_b.intensity;
                best_index = Some(index);
            }
        }

        if let Some(index) = best_index {
            dot += peak_a.intensity * ranked_b[index].intensity;
            claimed[index] = true;
        }
    }

    dot / (norm_a * norm_b).sqrt()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
