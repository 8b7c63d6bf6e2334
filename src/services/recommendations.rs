//! Rule-based wellness recommendations.
//!
//! Rules run in a fixed order and append to one list; the list is cut to
//! [`MAX_RECOMMENDATIONS`] at the end. The fallback rule looks at the count
//! before that cut.

use crate::models::mood::Mood;
use crate::models::recommendation::Recommendation;
use crate::services::wellness::AggregateStats;

pub const MAX_RECOMMENDATIONS: usize = 4;

const HIGH_STRESS_ABOVE: i32 = 6;
const LOW_ENERGY_BELOW: i32 = 5;
const HIGH_ENERGY_ABOVE: i32 = 7;
/// First local hour that counts as evening.
const EVENING_FROM_HOUR: u32 = 19;

pub fn recommend(
    stats: &AggregateStats,
    current_mood: Option<Mood>,
    local_hour: u32,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if stats.average_stress > HIGH_STRESS_ABOVE {
        recs.push(Recommendation::deep_breathing());
        recs.push(Recommendation::guided_meditation());
    }

    if stats.average_energy < LOW_ENERGY_BELOW {
        recs.push(Recommendation::take_a_walk());
        recs.push(Recommendation::stay_hydrated());
    } else if stats.average_energy > HIGH_ENERGY_ABOVE {
        recs.push(Recommendation::high_energy_workout());
    }

    if current_mood.is_some_and(Mood::needs_lift) {
        recs.push(Recommendation::uplifting_music());
        recs.push(Recommendation::gratitude_journal());
    }

    if recs.len() < MAX_RECOMMENDATIONS {
        recs.push(Recommendation::self_care_moment());
        if local_hour >= EVENING_FROM_HOUR {
            recs.push(Recommendation::prepare_for_sleep());
        }
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
