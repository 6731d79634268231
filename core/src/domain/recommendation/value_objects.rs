use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::domain::recipe::{entities::Recipe, value_objects::MealSlot};

/// Recipes returned per recommendation request.
pub const NUM_RECOMMENDATIONS: usize = 10;

/// A wall-clock time of day, parsed from "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        let hour: u32 = h.parse().ok()?;
        let minute: u32 = m.parse().ok()?;
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Which slot to recommend for a given hour: mornings get breakfast, midday
/// lunch, evenings dinner, and the night hours a coin flip between snack and
/// dessert.
pub fn slot_for_hour<R: Rng + ?Sized>(hour: u32, rng: &mut R) -> MealSlot {
    match hour {
        5..=10 => MealSlot::Breakfast,
        11..=15 => MealSlot::Lunch,
        16..=21 => MealSlot::Dinner,
        _ => *[MealSlot::Snack, MealSlot::Dessert]
            .choose(rng)
            .unwrap_or(&MealSlot::Snack),
    }
}

#[derive(Debug, Clone)]
pub struct DailyRecommendationsInput {
    pub user_id: Uuid,
    pub current_time: ClockTime,
}

#[derive(Debug, Clone)]
pub struct DailyRecommendations {
    pub meal_slot: MealSlot,
    pub recipes: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn clock_time_parses_valid_input() {
        assert_eq!(
            ClockTime::parse("07:30"),
            Some(ClockTime { hour: 7, minute: 30 })
        );
        assert_eq!(
            ClockTime::parse("23:59"),
            Some(ClockTime {
                hour: 23,
                minute: 59
            })
        );
    }

    #[test]
    fn clock_time_rejects_out_of_range_and_garbage() {
        assert_eq!(ClockTime::parse("24:00"), None);
        assert_eq!(ClockTime::parse("12:60"), None);
        assert_eq!(ClockTime::parse("noon"), None);
        assert_eq!(ClockTime::parse("12"), None);
        assert_eq!(ClockTime::parse(""), None);
    }

    #[test]
    fn slot_boundaries_match_the_day_parts() {
        let mut rng = StepRng::new(0, 1);

        assert_eq!(slot_for_hour(5, &mut rng), MealSlot::Breakfast);
        assert_eq!(slot_for_hour(10, &mut rng), MealSlot::Breakfast);
        assert_eq!(slot_for_hour(11, &mut rng), MealSlot::Lunch);
        assert_eq!(slot_for_hour(15, &mut rng), MealSlot::Lunch);
        assert_eq!(slot_for_hour(16, &mut rng), MealSlot::Dinner);
        assert_eq!(slot_for_hour(21, &mut rng), MealSlot::Dinner);
    }

    #[test]
    fn night_hours_pick_snack_or_dessert() {
        let mut rng = rand::thread_rng();
        for hour in [0, 1, 2, 3, 4, 22, 23] {
            let slot = slot_for_hour(hour, &mut rng);
            assert!(slot == MealSlot::Snack || slot == MealSlot::Dessert);
        }
    }
}
