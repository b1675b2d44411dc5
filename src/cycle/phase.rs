use serde::Serialize;

use crate::cycle::curve::PMS_ONSET_DAY;

/// Whether a cycle day falls in the high-variance (PMS) window.
pub fn is_high_variance_phase(day: u32) -> bool {
    day >= PMS_ONSET_DAY
}

/// The status block the dashboard renders for the current day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseOutlook {
    pub label: String,
    pub advice: String,
    pub alert_level: String,
    pub badge: String,
    pub high_variance: bool,
}

/// Two-branch lookup keyed on the phase classification.
pub fn outlook_for_day(day: u32) -> PhaseOutlook {
    if is_high_variance_phase(day) {
        PhaseOutlook {
            label: "Volatile swings (PMS)".to_string(),
            advice: "Hair-trigger day. If you hear \"whatever\", pick her favorite \
                 restaurant and do not ask follow-ups. Avoid work topics."
                .to_string(),
            alert_level: "4 (Alert)".to_string(),
            badge: "LOW".to_string(),
            high_variance: true,
        }
    } else {
        PhaseOutlook {
            label: "Steady climb".to_string(),
            advice: "Good shape today. A fine window for weekend plans or big purchases."
                .to_string(),
            alert_level: "1 (Safe)".to_string(),
            badge: "HIGH".to_string(),
            high_variance: false,
        }
    }
}
