use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The five meal slots a recipe can fill and a weekly plan schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
        MealSlot::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
            MealSlot::Dessert => "dessert",
        }
    }
}

impl std::str::FromStr for MealSlot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            "dessert" => Ok(MealSlot::Dessert),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary tags a recipe can carry. Labels are the public request/response
/// vocabulary ("low carb", "dairy free", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    Pescatarian,
    Paleo,
    DairyFree,
    FatFree,
    PeanutFree,
    SoyFree,
    WheatFree,
    LowCarb,
    LowCal,
    LowFat,
    LowSodium,
    LowSugar,
    LowCholesterol,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 15] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::Pescatarian,
        DietaryTag::Paleo,
        DietaryTag::DairyFree,
        DietaryTag::FatFree,
        DietaryTag::PeanutFree,
        DietaryTag::SoyFree,
        DietaryTag::WheatFree,
        DietaryTag::LowCarb,
        DietaryTag::LowCal,
        DietaryTag::LowFat,
        DietaryTag::LowSodium,
        DietaryTag::LowSugar,
        DietaryTag::LowCholesterol,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::Pescatarian => "pescatarian",
            DietaryTag::Paleo => "paleo",
            DietaryTag::DairyFree => "dairy free",
            DietaryTag::FatFree => "fat free",
            DietaryTag::PeanutFree => "peanut free",
            DietaryTag::SoyFree => "soy free",
            DietaryTag::WheatFree => "wheat free",
            DietaryTag::LowCarb => "low carb",
            DietaryTag::LowCal => "low cal",
            DietaryTag::LowFat => "low fat",
            DietaryTag::LowSodium => "low sodium",
            DietaryTag::LowSugar => "low sugar",
            DietaryTag::LowCholesterol => "low cholesterol",
        }
    }

    /// Accepts both "low carb" and "low_carb" spellings.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace('_', " ");
        Self::ALL.iter().copied().find(|t| t.label() == normalized)
    }
}

/// Flagged ingredients the dataset tracks per recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngredientTag {
    Pork,
    Alcohol,
    Beef,
    Bread,
    Butter,
    Cabbage,
    Carrot,
    Cheese,
    Chicken,
    Egg,
    Eggplant,
    Fish,
    Onion,
    Pasta,
    Peanut,
    Potato,
    Rice,
    Shrimp,
    Tofu,
    Tomato,
    Zucchini,
}

impl IngredientTag {
    pub const ALL: [IngredientTag; 21] = [
        IngredientTag::Pork,
        IngredientTag::Alcohol,
        IngredientTag::Beef,
        IngredientTag::Bread,
        IngredientTag::Butter,
        IngredientTag::Cabbage,
        IngredientTag::Carrot,
        IngredientTag::Cheese,
        IngredientTag::Chicken,
        IngredientTag::Egg,
        IngredientTag::Eggplant,
        IngredientTag::Fish,
        IngredientTag::Onion,
        IngredientTag::Pasta,
        IngredientTag::Peanut,
        IngredientTag::Potato,
        IngredientTag::Rice,
        IngredientTag::Shrimp,
        IngredientTag::Tofu,
        IngredientTag::Tomato,
        IngredientTag::Zucchini,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IngredientTag::Pork => "pork",
            IngredientTag::Alcohol => "alcohol",
            IngredientTag::Beef => "beef",
            IngredientTag::Bread => "bread",
            IngredientTag::Butter => "butter",
            IngredientTag::Cabbage => "cabbage",
            IngredientTag::Carrot => "carrot",
            IngredientTag::Cheese => "cheese",
            IngredientTag::Chicken => "chicken",
            IngredientTag::Egg => "egg",
            IngredientTag::Eggplant => "eggplant",
            IngredientTag::Fish => "fish",
            IngredientTag::Onion => "onion",
            IngredientTag::Pasta => "pasta",
            IngredientTag::Peanut => "peanut",
            IngredientTag::Potato => "potato",
            IngredientTag::Rice => "rice",
            IngredientTag::Shrimp => "shrimp",
            IngredientTag::Tofu => "tofu",
            IngredientTag::Tomato => "tomato",
            IngredientTag::Zucchini => "zucchini",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

/// Which meal slots a recipe can fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSlotFlags {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub snack: bool,
    pub dessert: bool,
}

impl MealSlotFlags {
    pub fn contains(&self, slot: MealSlot) -> bool {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snack,
            MealSlot::Dessert => self.dessert,
        }
    }

    pub fn slots(&self) -> Vec<MealSlot> {
        MealSlot::ALL
            .iter()
            .copied()
            .filter(|s| self.contains(*s))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub vegan: bool,
    pub pescatarian: bool,
    pub paleo: bool,
    pub dairy_free: bool,
    pub fat_free: bool,
    pub peanut_free: bool,
    pub soy_free: bool,
    pub wheat_free: bool,
    pub low_carb: bool,
    pub low_cal: bool,
    pub low_fat: bool,
    pub low_sodium: bool,
    pub low_sugar: bool,
    pub low_cholesterol: bool,
}

impl DietaryFlags {
    pub fn has(&self, tag: DietaryTag) -> bool {
        match tag {
            DietaryTag::Vegetarian => self.vegetarian,
            DietaryTag::Vegan => self.vegan,
            DietaryTag::Pescatarian => self.pescatarian,
            DietaryTag::Paleo => self.paleo,
            DietaryTag::DairyFree => self.dairy_free,
            DietaryTag::FatFree => self.fat_free,
            DietaryTag::PeanutFree => self.peanut_free,
            DietaryTag::SoyFree => self.soy_free,
            DietaryTag::WheatFree => self.wheat_free,
            DietaryTag::LowCarb => self.low_carb,
            DietaryTag::LowCal => self.low_cal,
            DietaryTag::LowFat => self.low_fat,
            DietaryTag::LowSodium => self.low_sodium,
            DietaryTag::LowSugar => self.low_sugar,
            DietaryTag::LowCholesterol => self.low_cholesterol,
        }
    }

    /// Active tags in declaration order.
    pub fn tags(&self) -> Vec<DietaryTag> {
        DietaryTag::ALL
            .iter()
            .copied()
            .filter(|t| self.has(*t))
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.tags().iter().map(|t| t.label().to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientFlags {
    pub pork: bool,
    pub alcohol: bool,
    pub beef: bool,
    pub bread: bool,
    pub butter: bool,
    pub cabbage: bool,
    pub carrot: bool,
    pub cheese: bool,
    pub chicken: bool,
    pub egg: bool,
    pub eggplant: bool,
    pub fish: bool,
    pub onion: bool,
    pub pasta: bool,
    pub peanut: bool,
    pub potato: bool,
    pub rice: bool,
    pub shrimp: bool,
    pub tofu: bool,
    pub tomato: bool,
    pub zucchini: bool,
}

impl IngredientFlags {
    pub fn has(&self, tag: IngredientTag) -> bool {
        match tag {
            IngredientTag::Pork => self.pork,
            IngredientTag::Alcohol => self.alcohol,
            IngredientTag::Beef => self.beef,
            IngredientTag::Bread => self.bread,
            IngredientTag::Butter => self.butter,
            IngredientTag::Cabbage => self.cabbage,
            IngredientTag::Carrot => self.carrot,
            IngredientTag::Cheese => self.cheese,
            IngredientTag::Chicken => self.chicken,
            IngredientTag::Egg => self.egg,
            IngredientTag::Eggplant => self.eggplant,
            IngredientTag::Fish => self.fish,
            IngredientTag::Onion => self.onion,
            IngredientTag::Pasta => self.pasta,
            IngredientTag::Peanut => self.peanut,
            IngredientTag::Potato => self.potato,
            IngredientTag::Rice => self.rice,
            IngredientTag::Shrimp => self.shrimp,
            IngredientTag::Tofu => self.tofu,
            IngredientTag::Tomato => self.tomato,
            IngredientTag::Zucchini => self.zucchini,
        }
    }

    pub fn tags(&self) -> Vec<IngredientTag> {
        IngredientTag::ALL
            .iter()
            .copied()
            .filter(|t| self.has(*t))
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.tags().iter().map(|t| t.label().to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonFlags {
    pub winter: bool,
    pub spring: bool,
    pub summer: bool,
    pub fall: bool,
}

impl SeasonFlags {
    pub fn has(&self, season: Season) -> bool {
        match season {
            Season::Winter => self.winter,
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        Season::ALL
            .iter()
            .filter(|s| self.has(**s))
            .map(|s| s.label().to_string())
            .collect()
    }
}

/// Repository-level search filter, already parsed and paginated.
#[derive(Debug, Clone, Default)]
pub struct RecipeSearchFilter {
    pub query: Option<String>,
    pub dietary: Vec<DietaryTag>,
    pub offset: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dietary_labels_round_trip() {
        for tag in DietaryTag::ALL {
            assert_eq!(DietaryTag::from_label(tag.label()), Some(tag));
        }
    }

    #[test]
    fn dietary_label_accepts_underscores_and_case() {
        assert_eq!(DietaryTag::from_label("Low_Carb"), Some(DietaryTag::LowCarb));
        assert_eq!(
            DietaryTag::from_label(" dairy free "),
            Some(DietaryTag::DairyFree)
        );
    }

    #[test]
    fn unknown_dietary_label_is_rejected() {
        assert_eq!(DietaryTag::from_label("keto"), None);
        assert_eq!(DietaryTag::from_label(""), None);
    }

    #[test]
    fn meal_slot_parses_its_own_name() {
        for slot in MealSlot::ALL {
            assert_eq!(slot.as_str().parse::<MealSlot>(), Ok(slot));
        }
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn dietary_flags_report_active_tags_in_order() {
        let flags = DietaryFlags {
            vegan: true,
            low_carb: true,
            ..Default::default()
        };
        assert_eq!(flags.tags(), vec![DietaryTag::Vegan, DietaryTag::LowCarb]);
        assert_eq!(flags.labels(), vec!["vegan", "low carb"]);
    }

    #[test]
    fn slot_flags_contains_matches_fields() {
        let flags = MealSlotFlags {
            breakfast: true,
            dessert: true,
            ..Default::default()
        };
        assert!(flags.contains(MealSlot::Breakfast));
        assert!(!flags.contains(MealSlot::Lunch));
        assert_eq!(flags.slots(), vec![MealSlot::Breakfast, MealSlot::Dessert]);
    }
}
