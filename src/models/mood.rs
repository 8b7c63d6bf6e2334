use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Energetic,
    Anxious,
    Sad,
    Tired,
    Stressed,
    Neutral,
}

impl Mood {
    /// Catalog order, as offered by the check-in picker.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Energetic,
        Mood::Anxious,
        Mood::Sad,
        Mood::Tired,
        Mood::Stressed,
        Mood::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Tired => "tired",
            Mood::Stressed => "stressed",
            Mood::Neutral => "neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Energetic => "⚡",
            Mood::Anxious => "😰",
            Mood::Sad => "😔",
            Mood::Tired => "😴",
            Mood::Stressed => "😓",
            Mood::Neutral => "😐",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Energetic => "Energetic",
            Mood::Anxious => "Anxious",
            Mood::Sad => "Sad",
            Mood::Tired => "Tired",
            Mood::Stressed => "Stressed",
            Mood::Neutral => "Neutral",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Mood::Happy => "wellness-happy",
            Mood::Calm => "wellness-calm",
            Mood::Energetic => "wellness-energy",
            Mood::Anxious | Mood::Stressed => "wellness-stress",
            Mood::Sad => "wellness-sad",
            Mood::Tired => "muted",
            Mood::Neutral => "secondary",
        }
    }

    /// Moods that pull in the uplifting-music and gratitude suggestions.
    pub fn needs_lift(self) -> bool {
        matches!(self, Mood::Sad | Mood::Anxious)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// One entry of the mood picker.
#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub id: Mood,
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Mood> for MoodOption {
    fn from(mood: Mood) -> Self {
        Self {
            id: mood,
            emoji: mood.emoji(),
            label: mood.label(),
            color: mood.color(),
        }
    }
}

pub fn mood_options() -> Vec<MoodOption> {
    Mood::ALL.into_iter().map(MoodOption::from).collect()
}
