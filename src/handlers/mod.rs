pub mod dashboard;
pub mod health;
pub mod mood_entries;
pub mod moods;
pub mod recommendations;
