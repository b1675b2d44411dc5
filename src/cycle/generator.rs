use rand::Rng;
use serde::Serialize;

use crate::cycle::curve;

/// One charted day: the model's prediction plus the observed sample where
/// one exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CyclePoint {
    pub day: u32,
    pub predicted: f32,
    pub actual: Option<f32>,
}

/// Full chart payload for the trends tab.
#[derive(Debug, Clone, Serialize)]
pub struct CycleSeries {
    pub points: Vec<CyclePoint>,
    /// Current cycle day, rendered as the chart's reference line.
    pub today: u32,
    pub reference_cycle_days: u32,
    /// Subheading under the chart title.
    pub caption: String,
}

/// Generate the synthetic series with ambient randomness.
pub fn generate(length: u32) -> Vec<CyclePoint> {
    use rand::thread_rng;

    let mut rng = thread_rng();
    generate_with(length, &mut rng)
}

/// Generate the synthetic series from an injected random source. Observed
/// samples perturb the unrounded prediction by up to one point either way,
/// clamp back onto the mood scale, then round to chart precision.
pub fn generate_with<R: Rng + ?Sized>(length: u32, rng: &mut R) -> Vec<CyclePoint> {
    (1..=length)
        .map(|day| {
            let base = curve::raw_predicted(day);
            let actual = if day < curve::OBSERVED_DAYS {
                let sampled = (base + rng.gen_range(-1.0..=1.0))
                    .clamp(curve::MOOD_MIN, curve::MOOD_MAX);
                Some(curve::round1(sampled))
            } else {
                None
            };
            CyclePoint {
                day,
                predicted: curve::round1(base),
                actual,
            }
        })
        .collect()
}
