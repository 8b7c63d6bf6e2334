use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Exercise,
    Relaxation,
    Social,
    Productivity,
    Mindfulness,
}

/// Symbolic icon reference; the client maps it onto its icon set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Brain,
    Headphones,
    Activity,
    Coffee,
    Zap,
    Music,
    BookOpen,
    Heart,
    Moon,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: RecommendationCategory,
    pub duration: &'static str,
    pub icon: IconRef,
    pub color: &'static str,
}

impl Recommendation {
    pub fn deep_breathing() -> Self {
        Self {
            id: "breathing",
            title: "Deep Breathing Exercise",
            description: "Try a 5-minute breathing exercise to reduce stress and anxiety",
            category: RecommendationCategory::Mindfulness,
            duration: "5 min",
            icon: IconRef::Brain,
            color: "wellness-calm",
        }
    }

    pub fn guided_meditation() -> Self {
        Self {
            id: "meditation",
            title: "Guided Meditation",
            description: "Listen to a calming meditation to center yourself",
            category: RecommendationCategory::Relaxation,
            duration: "10 min",
            icon: IconRef::Headphones,
            color: "wellness-calm",
        }
    }

    pub fn take_a_walk() -> Self {
        Self {
            id: "walk",
            title: "Take a Walk",
            description: "A short walk outside can boost your energy and mood",
            category: RecommendationCategory::Exercise,
            duration: "15 min",
            icon: IconRef::Activity,
            color: "wellness-energy",
        }
    }

    pub fn stay_hydrated() -> Self {
        Self {
            id: "hydrate",
            title: "Stay Hydrated",
            description: "Drink a glass of water and have a healthy snack",
            category: RecommendationCategory::Productivity,
            duration: "2 min",
            icon: IconRef::Coffee,
            color: "wellness-energy",
        }
    }

    pub fn high_energy_workout() -> Self {
        Self {
            id: "workout",
            title: "High-Energy Workout",
            description: "Channel your energy into a quick HIIT session",
            category: RecommendationCategory::Exercise,
            duration: "20 min",
            icon: IconRef::Zap,
            color: "wellness-energy",
        }
    }

    pub fn uplifting_music() -> Self {
        Self {
            id: "music",
            title: "Listen to Uplifting Music",
            description: "Put on your favorite playlist to lift your spirits",
            category: RecommendationCategory::Relaxation,
            duration: "Variable",
            icon: IconRef::Music,
            color: "wellness-happy",
        }
    }

    pub fn gratitude_journal() -> Self {
        Self {
            id: "journal",
            title: "Gratitude Journal",
            description: "Write down three things you're grateful for today",
            category: RecommendationCategory::Mindfulness,
            duration: "5 min",
            icon: IconRef::BookOpen,
            color: "wellness-happy",
        }
    }

    pub fn self_care_moment() -> Self {
        Self {
            id: "self-care",
            title: "Self-Care Moment",
            description: "Take a few minutes for yourself - read, stretch, or just breathe",
            category: RecommendationCategory::Relaxation,
            duration: "10 min",
            icon: IconRef::Heart,
            color: "primary",
        }
    }

    pub fn prepare_for_sleep() -> Self {
        Self {
            id: "sleep",
            title: "Prepare for Sleep",
            description: "Start winding down with a calming evening routine",
            category: RecommendationCategory::Relaxation,
            duration: "30 min",
            icon: IconRef::Moon,
            color: "wellness-calm",
        }
    }
}
