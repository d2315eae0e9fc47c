//! Extracted-ion-chromatogram request parsing and trace normalization.
//!
//! Unlike the tolerant peak-list parsers, this is a strict boundary: an
//! extraction run costs real time on a raw file, so bad parameters are
//! reported to the caller instead of being silently filtered.

use serde_json::Value;
use thiserror::Error;

use crate::model::EicTrace;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum EicError {
    #[error("at least one target m/z value is required")]
    EmptyTargetList,
    #[error("invalid m/z value: {0}")]
    InvalidMz(String),
    #[error("invalid numeric value for {field}")]
    InvalidNumber { field: &'static str },
    #[error("provide both {low} and {high}")]
    HalfOpenRange {
        low: &'static str,
        high: &'static str,
    },
    #[error("{low} must be smaller than {high}")]
    EmptyRange {
        low: &'static str,
        high: &'static str,
    },
    #[error("{field} must be positive")]
    NonPositiveTolerance { field: &'static str },
}

// ---------------------------------------------------------------------------
// Request parameter parsing
// ---------------------------------------------------------------------------

/// Parse a user-entered list of target m/z values.
///
/// Values may be separated by commas or semicolons; blank entries are
/// skipped. An empty list or any unparsable entry is an error.
pub fn parse_mz_list(raw: &str) -> Result<Vec<f64>, EicError> {
    let normalized = raw.replace(';', ",");
    let parts: Vec<&str> = normalized
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        return Err(EicError::EmptyTargetList);
    }

    parts
        .into_iter()
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| EicError::InvalidMz(part.to_string()))
        })
        .collect()
}

/// Parse an optional numeric form field. Absent or blank input is `None`,
/// not an error; present-but-unparsable input is.
pub fn parse_optional_number(
    raw: Option<&str>,
    field: &'static str,
) -> Result<Option<f64>, EicError> {
    let text = match raw {
        Some(text) => text.trim(),
        None => return Ok(None),
    };
    if text.is_empty() {
        return Ok(None);
    }

    text.parse::<f64>()
        .map(Some)
        .map_err(|_| EicError::InvalidNumber { field })
}

/// Validate an optional `(low, high)` pair: both ends or neither, and the
/// range must be non-empty. Used for RT windows and y-axis limits alike.
pub fn validated_range(
    low: Option<f64>,
    high: Option<f64>,
    low_name: &'static str,
    high_name: &'static str,
) -> Result<Option<(f64, f64)>, EicError> {
    match (low, high) {
        (None, None) => Ok(None),
        (Some(low), Some(high)) if low < high => Ok(Some((low, high))),
        (Some(_), Some(_)) => Err(EicError::EmptyRange {
            low: low_name,
            high: high_name,
        }),
        _ => Err(EicError::HalfOpenRange {
            low: low_name,
            high: high_name,
        }),
    }
}

/// Extraction tolerances (m/z, RT) must be strictly positive.
pub fn require_positive(value: f64, field: &'static str) -> Result<f64, EicError> {
    if value <= 0.0 {
        return Err(EicError::NonPositiveTolerance { field });
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Trace normalization
// ---------------------------------------------------------------------------

/// Normalize a loosely-typed extraction payload into typed traces.
///
/// Backends disagree on shape: a single `[time, intensity, scan?]` entry, a
/// list of such entries, or a bare pair of scalar arrays. All are accepted;
/// entries that are not lists of at least two arrays, or whose time or
/// intensity arrays come out empty, are skipped. Time and intensity are
/// truncated to their common length. The n-th trace is labeled with the
/// n-th target m/z when one is available.
pub fn normalize_eic_traces(data: &Value, target_mz: &[f64]) -> Vec<EicTrace> {
    let entries: Vec<&Value> = match data {
        Value::Null => return Vec::new(),
        Value::Array(items) => {
            // A bare [time, intensity] pair of scalars is one trace, not two.
            if items.first().map(Value::is_number).unwrap_or(false) {
                vec![data]
            } else {
                items.iter().collect()
            }
        }
        other => vec![other],
    };

    let mut traces = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let parts = match entry.as_array() {
            Some(parts) if parts.len() >= 2 => parts,
            _ => continue,
        };

        let time = to_float_list(&parts[0]);
        let intensity = to_float_list(&parts[1]);
        if time.is_empty() || intensity.is_empty() {
            continue;
        }

        let scan_index = parts.get(2).map(to_float_list).unwrap_or_default();

        let aligned = time.len().min(intensity.len());
        let mz = target_mz.get(index).copied();
        let label = match mz {
            Some(mz) => format!("m/z {mz:.4}"),
            None => format!("Trace {}", index + 1),
        };

        traces.push(EicTrace {
            label,
            mz,
            time: time[..aligned].to_vec(),
            intensity: intensity[..aligned].to_vec(),
            scan_index: if scan_index.is_empty() {
                Vec::new()
            } else {
                scan_index[..aligned.min(scan_index.len())].to_vec()
            },
        });
    }

    traces
}

/// Coerce a JSON value to a float list, dropping whatever will not convert.
/// A lone scalar becomes a one-element list.
fn to_float_list(value: &Value) -> Vec<f64> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(coerce_f64).collect(),
        other => coerce_f64(other).into_iter().collect(),
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mz_list_accepts_commas_and_semicolons() {
        assert_eq!(
            parse_mz_list("100; 200,300.5").unwrap(),
            vec![100.0, 200.0, 300.5]
        );
    }

    #[test]
    fn mz_list_skips_blank_entries() {
        assert_eq!(parse_mz_list(",100,,200,").unwrap(), vec![100.0, 200.0]);
    }

    #[test]
    fn empty_mz_list_is_an_error() {
        assert_eq!(parse_mz_list(""), Err(EicError::EmptyTargetList));
        assert_eq!(parse_mz_list(" , ; "), Err(EicError::EmptyTargetList));
    }

    #[test]
    fn bad_mz_value_is_reported() {
        assert_eq!(
            parse_mz_list("100,abc"),
            Err(EicError::InvalidMz("abc".to_string()))
        );
    }

    #[test]
    fn optional_number_treats_blank_as_absent() {
        assert_eq!(parse_optional_number(None, "target_rt"), Ok(None));
        assert_eq!(parse_optional_number(Some("  "), "target_rt"), Ok(None));
        assert_eq!(parse_optional_number(Some("3.2"), "target_rt"), Ok(Some(3.2)));
        assert_eq!(
            parse_optional_number(Some("x"), "target_rt"),
            Err(EicError::InvalidNumber { field: "target_rt" })
        );
    }

    #[test]
    fn range_requires_both_ends() {
        assert_eq!(validated_range(None, None, "lo", "hi"), Ok(None));
        assert_eq!(
            validated_range(Some(1.0), Some(2.0), "lo", "hi"),
            Ok(Some((1.0, 2.0)))
        );
        assert_eq!(
            validated_range(Some(1.0), None, "lo", "hi"),
            Err(EicError::HalfOpenRange { low: "lo", high: "hi" })
        );
        assert_eq!(
            validated_range(Some(2.0), Some(2.0), "lo", "hi"),
            Err(EicError::EmptyRange { low: "lo", high: "hi" })
        );
    }

    #[test]
    fn tolerances_must_be_positive() {
        assert_eq!(require_positive(0.005, "mz_tol"), Ok(0.005));
        assert_eq!(
            require_positive(0.0, "mz_tol"),
            Err(EicError::NonPositiveTolerance { field: "mz_tol" })
        );
    }

    #[test]
    fn normalizes_a_list_of_entries() {
        let data = json!([
            [[0.0, 1.0, 2.0], [10.0, 20.0, 30.0], [1, 2, 3]],
            [[0.0, 1.0], [5.0, 6.0]]
        ]);
        let traces = normalize_eic_traces(&data, &[100.1234, 200.0]);

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].label, "m/z 100.1234");
        assert_eq!(traces[0].scan_index, vec![1.0, 2.0, 3.0]);
        assert_eq!(traces[1].mz, Some(200.0));
        assert!(traces[1].scan_index.is_empty());
    }

    #[test]
    fn single_entry_payload_is_one_trace() {
        let data = json!([[0.0, 1.0], [10.0, 20.0]]);
        let traces = normalize_eic_traces(&data, &[]);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].label, "Trace 1");
        assert_eq!(traces[0].time, vec![0.0, 1.0]);
    }

    #[test]
    fn mismatched_lengths_truncate_to_common_prefix() {
        let data = json!([[[0.0, 1.0, 2.0], [10.0, 20.0]]]);
        let traces = normalize_eic_traces(&data, &[]);
        assert_eq!(traces[0].time, vec![0.0, 1.0]);
        assert_eq!(traces[0].intensity, vec![10.0, 20.0]);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let data = json!([
            "not a trace",
            [[0.0], []],
            [[0.0, 1.0], [1.0, 2.0]]
        ]);
        let traces = normalize_eic_traces(&data, &[]);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].label, "Trace 3");
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(normalize_eic_traces(&Value::Null, &[]).is_empty());
    }

    #[test]
    fn numeric_strings_and_scalars_are_coerced() {
        let data = json!([[["0.5", 1.5, "x"], 7.0]]);
        let traces = normalize_eic_traces(&data, &[]);
        // scalar intensity becomes a one-element list; time is truncated to it
        assert_eq!(traces[0].time, vec![0.5]);
        assert_eq!(traces[0].intensity, vec![7.0]);
    }
}
