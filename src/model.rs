use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Peak variants
// ---------------------------------------------------------------------------

/// One chromatographic point: retention time plus measured intensity.
///
/// Produced by [`crate::peaks::parse_rt_intensity_pairs`]; both fields are
/// guaranteed finite after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RtPeak {
    pub rt: f64,
    pub intensity: f64,
}

/// One mass/intensity observation in a spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub mz: f64,
    pub intensity: f64,
}

// ---------------------------------------------------------------------------
// Mirror-plot series
// ---------------------------------------------------------------------------

/// One direction of a mirror plot as index-aligned coordinate arrays.
///
/// Each peak contributes three entries to both `x` and `y`: the stick base,
/// the stick tip, and a `None` gap marker. The gap tells a line renderer to
/// lift the pen between sticks; it must never be read as `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StickSeries {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
}

/// Normalized stick series for two spectra rendered back-to-back.
///
/// `top` holds the query spectrum (sticks pointing up), `bottom` the
/// reference (sticks pointing down, negative y). Intensities are scaled into
/// `[-1, 1]` by the largest absolute intensity across both inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorSeries {
    pub top: StickSeries,
    pub bottom: StickSeries,
    /// Largest m/z across both spectra, floored at `0` for a sane axis
    /// extent on empty input.
    pub max_mz: f64,
}

// ---------------------------------------------------------------------------
// EIC traces
// ---------------------------------------------------------------------------

/// One extracted-ion chromatogram trace, normalized from the loosely-typed
/// payload an extraction backend returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EicTrace {
    /// Display label, `m/z 123.4567` when a target m/z is known.
    pub label: String,
    /// Target m/z this trace was extracted for, if known.
    pub mz: Option<f64>,
    /// Retention times; same length as `intensity`.
    pub time: Vec<f64>,
    pub intensity: Vec<f64>,
    /// Scan indices, empty when the source did not provide them.
    pub scan_index: Vec<f64>,
}
