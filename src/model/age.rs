use serde::{Deserialize, Serialize};

/// Fixed age bands used to select the applicable benchmark range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Young,
    Middle,
    Senior,
    Elder,
}

impl AgeGroup {
    pub const COUNT: usize = 4;

    pub const ALL: [AgeGroup; AgeGroup::COUNT] = [
        AgeGroup::Young,
        AgeGroup::Middle,
        AgeGroup::Senior,
        AgeGroup::Elder,
    ];

    pub fn from_age(age: i32) -> Self {
        if age < 40 {
            AgeGroup::Young
        } else if age < 60 {
            AgeGroup::Middle
        } else if age < 75 {
            AgeGroup::Senior
        } else {
            AgeGroup::Elder
        }
    }

    pub fn index(self) -> usize {
        match self {
            AgeGroup::Young => 0,
            AgeGroup::Middle => 1,
            AgeGroup::Senior => 2,
            AgeGroup::Elder => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Young => "under 40",
            AgeGroup::Middle => "40-59",
            AgeGroup::Senior => "60-74",
            AgeGroup::Elder => "75+",
        }
    }
}
