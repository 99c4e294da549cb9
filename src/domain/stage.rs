use serde::Serialize;

/// One of the three sequential phases of a duty run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stage {
    /// Filling each tray with side dishes.
    #[serde(rename = "Isi Lauk")]
    Fill,
    /// Carrying batches of trays to the tables.
    #[serde(rename = "Angkat Ompreng")]
    Transport,
    /// Topping up each tray with rice.
    #[serde(rename = "Tambah Nasi")]
    Replenish,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Fill, Stage::Transport, Stage::Replenish];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fill => "Isi Lauk",
            Stage::Transport => "Angkat Ompreng",
            Stage::Replenish => "Tambah Nasi",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventRecord {
    pub stage: Stage,
    pub cumulative_minutes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_stage_order() {
        let labels: Vec<&str> = Stage::ALL.iter().map(Stage::label).collect();
        assert_eq!(labels, vec!["Isi Lauk", "Angkat Ompreng", "Tambah Nasi"]);
    }

    #[test]
    fn event_record_serializes_with_stage_label() {
        let record = EventRecord {
            stage: Stage::Transport,
            cumulative_minutes: 1.5,
        };
        let yaml = serde_yaml::to_string(&record).unwrap();
        assert!(yaml.contains("stage: Angkat Ompreng"));
        assert!(yaml.contains("cumulative_minutes: 1.5"));
    }
}
