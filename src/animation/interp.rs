/// Behavior of [`interpolate`] outside its input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the nearest endpoint value.
    #[default]
    Clamp,
    /// Continue the line through both endpoints.
    Extend,
}

/// Map `input` from `input_range` onto `output_range` linearly.
///
/// A zero-width input range behaves as a step at `input_range[0]`: inputs before it give
/// `output_range[0]`, inputs at or after it give `output_range[1]`. An inverted input range is
/// treated the same way, so a misconfigured span never flips the output direction.
pub fn interpolate(
    input: f64,
    input_range: [f64; 2],
    output_range: [f64; 2],
    extrapolate: Extrapolate,
) -> f64 {
    let [in0, in1] = input_range;
    let [out0, out1] = output_range;

    if in1 <= in0 {
        return if input < in0 { out0 } else { out1 };
    }

    let mut t = (input - in0) / (in1 - in0);
    if extrapolate == Extrapolate::Clamp {
        t = t.clamp(0.0, 1.0);
    }
    out0 + (out1 - out0) * t
}

/// [`interpolate`] over integer frames with clamping on both sides.
pub fn ramp_frames(local_frame: i64, from_frame: i64, to_frame: i64, from: f64, to: f64) -> f64 {
    interpolate(
        local_frame as f64,
        [from_frame as f64, to_frame as f64],
        [from, to],
        Extrapolate::Clamp,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
