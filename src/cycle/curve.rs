//! Deterministic half of the synthetic cycle signal: a sinusoid around a
//! baseline mood with a flat penalty once the late-cycle window starts.

/// Baseline mood the sinusoid oscillates around.
pub const BASELINE: f32 = 6.0;
/// Swing of the sinusoid above and below the baseline.
pub const AMPLITUDE: f32 = 3.0;
/// Horizontal shift of the sinusoid, in days.
pub const PHASE_SHIFT: f32 = 5.0;
/// Angular frequency, radians per day.
pub const FREQUENCY: f32 = 0.25;
/// Flat drop applied to days after the onset.
pub const LATE_CYCLE_PENALTY: f32 = 2.0;
/// First day of the high-variance window. The penalty hits the days after
/// it; the phase classification includes it.
pub const PMS_ONSET_DAY: u32 = 24;
/// Days at the start of the cycle that carry observed samples.
pub const OBSERVED_DAYS: u32 = 15;
/// Bounds of the mood scale.
pub const MOOD_MIN: f32 = 1.0;
pub const MOOD_MAX: f32 = 10.0;

/// Clamped, unrounded predicted mood for a cycle day. The perturbation in
/// the generator works from this value so rounding happens exactly once.
pub fn raw_predicted(day: u32) -> f32 {
    let mut value = BASELINE + AMPLITUDE * ((day as f32 - PHASE_SHIFT) * FREQUENCY).sin();
    if day > PMS_ONSET_DAY {
        value -= LATE_CYCLE_PENALTY;
    }
    value.clamp(MOOD_MIN, MOOD_MAX)
}

/// Predicted mood for a cycle day at chart precision.
pub fn predicted_mood(day: u32) -> f32 {
    round1(raw_predicted(day))
}

/// Round to one decimal, the precision every charted value carries.
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
