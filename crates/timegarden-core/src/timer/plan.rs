use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Work,
    Break,
}

impl StageKind {
    /// The toast shown when a stage of this kind begins.
    pub fn announcement(self) -> &'static str {
        match self {
            StageKind::Work => "Time To Work!",
            StageKind::Break => "Break Time!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub kind: StageKind,
    /// Duration in minutes.
    pub minutes: u64,
}

impl Stage {
    /// Stage duration in seconds, saturating on absurdly large inputs.
    pub fn duration_secs(&self) -> u64 {
        self.minutes.saturating_mul(60)
    }
}

/// The ordered stage sequence of one session, immutable once built.
///
/// For `cycles` repetitions: one Work stage, then one Break stage, with the
/// trailing Break after the final cycle omitted. Length is `1` for a single
/// cycle and `2 * cycles - 1` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagePlan {
    stages: Vec<Stage>,
    cycles: u32,
}

impl StagePlan {
    pub fn build(active_minutes: u64, break_minutes: u64, cycles: u32) -> Self {
        let mut stages = Vec::with_capacity(2 * cycles as usize);
        for cycle in 1..=cycles {
            stages.push(Stage {
                kind: StageKind::Work,
                minutes: active_minutes,
            });
            if cycle != cycles {
                stages.push(Stage {
                    kind: StageKind::Break,
                    minutes: break_minutes,
                });
            }
        }
        Self { stages, cycles }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// 1-based cycle number the stage at `index` belongs to.
    pub fn cycle_of(&self, index: usize) -> u32 {
        (index / 2) as u32 + 1
    }

    /// Sum of work minutes across the plan; the session reward equals this.
    pub fn work_minutes(&self) -> u64 {
        self.stages
            .iter()
            .filter(|s| s.kind == StageKind::Work)
            .map(|s| s.minutes)
            .sum()
    }
}
