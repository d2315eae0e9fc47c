use crate::model::{MirrorSeries, Peak, StickSeries};

// ---------------------------------------------------------------------------
// Mirror-plot series builder
// ---------------------------------------------------------------------------

/// Build normalized stick series for a back-to-back mirror plot of two
/// spectra.
///
/// Intensities are scaled by the largest absolute intensity across both
/// inputs so the tallest stick reaches `±1`; when every intensity is `0`
/// (or both spectra are empty) the denominator is `1` and the plot shows
/// flat sticks instead of failing. `a` points up, `b` points down.
///
/// Never fails; empty input produces empty series with `max_mz == 0`.
pub fn mirror_series(a: &[Peak], b: &[Peak]) -> MirrorSeries {
    let max_intensity = a
        .iter()
        .chain(b)
        .map(|p| p.intensity.abs())
        .fold(0.0_f64, f64::max);
    let max_intensity = if max_intensity == 0.0 { 1.0 } else { max_intensity };

    let max_mz = a
        .iter()
        .chain(b)
        .map(|p| p.mz)
        .fold(0.0_f64, f64::max);

    MirrorSeries {
        top: build_sticks(a, 1.0, max_intensity),
        bottom: build_sticks(b, -1.0, max_intensity),
        max_mz,
    }
}

/// One vertical stick per peak: base at `y = 0`, tip at the signed scaled
/// intensity, then a `None` gap in both axes so a line renderer lifts the
/// pen before the next stick.
fn build_sticks(spectrum: &[Peak], direction: f64, max_intensity: f64) -> StickSeries {
    let mut x = Vec::with_capacity(spectrum.len() * 3);
    let mut y = Vec::with_capacity(spectrum.len() * 3);

    for peak in spectrum {
        x.extend([Some(peak.mz), Some(peak.mz), None]);
        y.extend([Some(0.0), Some(direction * peak.intensity / max_intensity), None]);
    }

    StickSeries { x, y }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(mz: f64, intensity: f64) -> Peak {
        Peak { mz, intensity }
    }

    #[test]
    fn empty_inputs_produce_empty_series() {
        let series = mirror_series(&[], &[]);
        assert!(series.top.x.is_empty());
        assert!(series.bottom.y.is_empty());
        assert_eq!(series.max_mz, 0.0);
    }

    #[test]
    fn sticks_have_three_entries_per_peak_with_gaps() {
        let series = mirror_series(&[peak(100.0, 10.0), peak(200.0, 5.0)], &[]);
        assert_eq!(series.top.x.len(), 6);
        assert_eq!(series.top.y.len(), 6);
        assert_eq!(series.top.x[2], None);
        assert_eq!(series.top.y[5], None);
        assert_eq!(series.top.x[0], Some(100.0));
        assert_eq!(series.top.x[1], Some(100.0));
    }

    #[test]
    fn tallest_stick_is_normalized_to_one() {
        let series = mirror_series(&[peak(100.0, 20.0)], &[peak(150.0, 40.0)]);
        assert_eq!(series.top.y[1], Some(0.5));
        assert_eq!(series.bottom.y[1], Some(-1.0));
    }

    #[test]
    fn bottom_spectrum_points_down() {
        let series = mirror_series(&[], &[peak(100.0, 10.0)]);
        assert_eq!(series.bottom.y[0], Some(0.0));
        assert_eq!(series.bottom.y[1], Some(-1.0));
    }

    #[test]
    fn all_zero_intensities_render_flat_instead_of_failing() {
        let series = mirror_series(&[peak(100.0, 0.0)], &[peak(200.0, 0.0)]);
        assert_eq!(series.top.y[1], Some(0.0));
        assert_eq!(series.bottom.y[1], Some(-0.0));
        assert_eq!(series.max_mz, 200.0);
    }

    #[test]
    fn max_mz_spans_both_spectra() {
        let series = mirror_series(&[peak(100.0, 1.0)], &[peak(350.5, 1.0)]);
        assert_eq!(series.max_mz, 350.5);
    }

    #[test]
    fn negative_intensities_scale_by_magnitude() {
        let series = mirror_series(&[peak(100.0, -10.0)], &[peak(200.0, 5.0)]);
        assert_eq!(series.top.y[1], Some(-1.0));
        assert_eq!(series.bottom.y[1], Some(-0.5));
    }

    #[test]
    fn gap_markers_serialize_as_null() {
        let series = mirror_series(&[peak(100.0, 10.0)], &[]);
        let json = serde_json::to_value(&series.top).unwrap();
        assert_eq!(json["x"][2], serde_json::Value::Null);
        assert_eq!(json["y"][2], serde_json::Value::Null);
    }
}
