use serde::Serialize;

/// Categorical verdict derived from the sample mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCategory {
    HighlyEfficient,
    ModeratelyEfficient,
    Inefficient,
}

impl StatusCategory {
    pub const HIGHLY_EFFICIENT_BELOW: f64 = 240.0;
    pub const EFFICIENT_BELOW: f64 = 300.0;

    /// Bands are half-open: `[.., 240)`, `[240, 300)`, `[300, ..)`.
    pub fn classify(mean_minutes: f64) -> Self {
        if mean_minutes < Self::HIGHLY_EFFICIENT_BELOW {
            StatusCategory::HighlyEfficient
        } else if mean_minutes < Self::EFFICIENT_BELOW {
            StatusCategory::ModeratelyEfficient
        } else {
            StatusCategory::Inefficient
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::HighlyEfficient => "highly-efficient",
            StatusCategory::ModeratelyEfficient => "moderately-efficient",
            StatusCategory::Inefficient => "inefficient",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
