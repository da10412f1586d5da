//! Rule table behind [`generate`].
//!
//! Three passes run in order over one accumulator: age tier, breed, then
//! condition. Later passes may overwrite or append to what earlier ones
//! wrote. Finalization always appends the universal hazards and the fixed
//! care notes.

use crate::domain::diet_plan::{
    entities::{DietPlan, MealSlot},
    value_objects::{AgeTier, BreedGroup, Condition, PetProfile},
};

pub const UNIVERSAL_HAZARDS: [&str; 6] = [
    "Chocolate and caffeine",
    "Grapes and raisins",
    "Onions and garlic",
    "Xylitol (artificial sweetener)",
    "Cooked bones",
    "High-fat foods",
];

pub const IMPORTANT_NOTES: [&str; 5] = [
    "Always transition to new foods gradually over 7-10 days",
    "Provide fresh water at all times",
    "Consult your veterinarian before making major diet changes",
    "Monitor your pet's weight and adjust portions as needed",
    "This plan is a general guideline - individual needs may vary",
];

struct TierRules {
    daily_amount: &'static str,
    calories: &'static str,
    meals_per_day: &'static str,
    schedule: &'static [(&'static str, &'static str, &'static str)],
    recommended_foods: &'static [&'static str],
    special_recommendations: &'static [&'static str],
}

static YOUNG: TierRules = TierRules {
    daily_amount: "1-2 cups",
    calories: "400-800 kcal",
    meals_per_day: "3-4 meals",
    schedule: &[
        ("7:00 AM", "Breakfast", "1/2 cup"),
        ("12:00 PM", "Lunch", "1/2 cup"),
        ("5:00 PM", "Dinner", "1/2 cup"),
        ("9:00 PM", "Evening Snack", "1/4 cup"),
    ],
    recommended_foods: &[
        "High-quality puppy/kitten food",
        "Cooked chicken breast",
        "Cooked rice",
        "Puppy milk replacer",
        "Soft vegetables (carrots, sweet potato)",
    ],
    special_recommendations: &[
        "Feed smaller, frequent meals for better digestion",
        "Ensure food is age-appropriate and easy to chew",
        "Monitor weight gain regularly",
    ],
};

// Adult keeps the base amounts and adds no advice of its own.
static ADULT: TierRules = TierRules {
    daily_amount: "2-3 cups",
    calories: "800-1200 kcal",
    meals_per_day: "2-3 meals",
    schedule: &[
        ("8:00 AM", "Breakfast", "1.5 cups"),
        ("6:00 PM", "Dinner", "1.5 cups"),
    ],
    recommended_foods: &[
        "High-quality adult pet food",
        "Lean meats (chicken, turkey, fish)",
        "Brown rice or sweet potato",
        "Fresh vegetables (carrots, green beans)",
        "Healthy fats (fish oil)",
    ],
    special_recommendations: &[],
};

static SENIOR: TierRules = TierRules {
    daily_amount: "1.5-2.5 cups",
    calories: "600-1000 kcal",
    meals_per_day: "2 meals",
    schedule: &[
        ("8:00 AM", "Breakfast", "1 cup"),
        ("6:00 PM", "Dinner", "1 cup"),
    ],
    recommended_foods: &[
        "Senior pet food formula",
        "Lean proteins (chicken, fish)",
        "Joint support supplements",
        "Easily digestible grains",
        "Antioxidant-rich vegetables",
    ],
    special_recommendations: &[
        "Choose senior-specific formulas for joint health",
        "Monitor for weight management",
        "Consider softer foods if dental issues exist",
    ],
};

const ALLERGY_FOODS: [&str; 4] = [
    "Limited ingredient diet",
    "Novel protein sources (duck, venison)",
    "Grain-free options if grain allergic",
    "Hypoallergenic formulas",
];

fn tier_rules(tier: AgeTier) -> &'static TierRules {
    match tier {
        AgeTier::Young => &YOUNG,
        AgeTier::Adult => &ADULT,
        AgeTier::Senior => &SENIOR,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Builds the plan for one profile. Never fails: unknown ages fall back to
/// the adult tier and unknown breeds or conditions change nothing.
pub fn generate(profile: &PetProfile) -> DietPlan {
    let mut draft = DietPlanDraft::new(profile.age.tier());
    draft.apply_breed(BreedGroup::classify(&profile.breed));
    draft.apply_condition(&profile.condition);
    draft.finalize()
}

struct DietPlanDraft {
    daily_amount: String,
    calories: String,
    meals_per_day: String,
    meal_schedule: Vec<MealSlot>,
    recommended_foods: Vec<String>,
    avoid_foods: Vec<String>,
    special_recommendations: Vec<String>,
}

impl DietPlanDraft {
    fn new(tier: AgeTier) -> Self {
        let rules = tier_rules(tier);

        Self {
            daily_amount: rules.daily_amount.to_string(),
            calories: rules.calories.to_string(),
            meals_per_day: rules.meals_per_day.to_string(),
            meal_schedule: rules
                .schedule
                .iter()
                .map(|(time, name, amount)| MealSlot::new(time, name, amount))
                .collect(),
            recommended_foods: owned(rules.recommended_foods),
            avoid_foods: Vec::new(),
            special_recommendations: owned(rules.special_recommendations),
        }
    }

    fn recommend(&mut self, food: &str) {
        self.recommended_foods.push(food.to_string());
    }

    fn advise(&mut self, advice: &[&str]) {
        self.special_recommendations.extend(owned(advice));
    }

    fn adjust_portions(&mut self, adjustment: &str) {
        self.daily_amount = adjustment.to_string();
        self.calories = adjustment.to_string();
    }

    fn apply_breed(&mut self, group: BreedGroup) {
        match group {
            BreedGroup::Retriever => self.advise(&[
                "Monitor portion sizes - this breed is prone to overeating",
                "Include omega-3 fatty acids for coat health",
            ]),
            BreedGroup::Feline => {
                self.recommend("Hairball control formula");
                self.advise(&[
                    "Provide plenty of fresh water",
                    "Consider wet food for hydration",
                ]);
            }
            BreedGroup::Other => {}
        }
    }

    fn apply_condition(&mut self, condition: &Condition) {
        match condition {
            Condition::Overweight => {
                self.adjust_portions("Reduce by 20%");
                self.recommend("Weight management formula");
                self.advise(&[
                    "Increase exercise and reduce treats",
                    "Use measuring cups for accurate portions",
                ]);
            }
            Condition::Underweight => {
                self.adjust_portions("Increase by 15%");
                self.recommend("High-calorie, nutrient-dense food");
                self.advise(&["Add healthy fats to meals"]);
            }
            Condition::Allergies => {
                self.recommended_foods = owned(&ALLERGY_FOODS);
                self.avoid_foods
                    .push("Common allergens (chicken, beef, wheat, corn)".to_string());
                self.advise(&["Introduce new foods gradually"]);
            }
            Condition::Diabetes => {
                self.recommend("High-fiber, low-carb diet");
                self.advise(&[
                    "Feed at consistent times with medication",
                    "Monitor blood sugar levels regularly",
                ]);
            }
            Condition::KidneyDisease => {
                self.recommend("Low-phosphorus, moderate protein diet");
                self.advise(&["Increase water intake", "Work closely with veterinarian"]);
            }
            Condition::Normal | Condition::Unrecognized(_) => {}
        }
    }

    fn finalize(mut self) -> DietPlan {
        self.avoid_foods.extend(owned(&UNIVERSAL_HAZARDS));

        DietPlan {
            daily_amount: self.daily_amount,
            calories: self.calories,
            meals_per_day: self.meals_per_day,
            meal_schedule: self.meal_schedule,
            recommended_foods: self.recommended_foods,
            avoid_foods: self.avoid_foods,
            special_recommendations: self.special_recommendations,
            important_notes: owned(&IMPORTANT_NOTES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(age: &str, breed: &str, condition: &str) -> DietPlan {
        generate(&PetProfile::new("Buddy", age, breed, condition))
    }

    fn ends_with_hazards(plan: &DietPlan) -> bool {
        let avoid = plan.avoid_foods();
        avoid.len() >= UNIVERSAL_HAZARDS.len()
            && avoid[avoid.len() - UNIVERSAL_HAZARDS.len()..]
                .iter()
                .zip(UNIVERSAL_HAZARDS.iter())
                .all(|(a, b)| a == b)
    }

    #[test]
    fn test_hazards_and_notes_for_every_condition() {
        let conditions = [
            "normal",
            "overweight",
            "underweight",
            "allergies",
            "diabetes",
            "kidney disease",
            "something else",
        ];

        for condition in conditions {
            for age in ["puppy", "3", "12", "unknown"] {
                let plan = plan(age, "Beagle", condition);
                assert!(ends_with_hazards(&plan), "{age}/{condition}");
                assert_eq!(plan.important_notes(), IMPORTANT_NOTES);
            }
        }
    }

    #[test]
    fn test_puppy_gets_four_meals() {
        let plan = plan("puppy", "Beagle", "normal");
        assert_eq!(plan.meals_per_day(), "3-4 meals");
        assert_eq!(plan.daily_amount(), "1-2 cups");
        assert_eq!(plan.calories(), "400-800 kcal");
        assert_eq!(plan.meal_schedule().len(), 4);
        assert_eq!(plan.meal_schedule()[3].name, "Evening Snack");
        assert_eq!(plan.special_recommendations().len(), 3);
    }

    #[test]
    fn test_senior_gets_two_meals() {
        let plan = plan("10", "Beagle", "normal");
        assert_eq!(plan.meals_per_day(), "2 meals");
        let times: Vec<&str> = plan.meal_schedule().iter().map(|m| m.time.as_str()).collect();
        assert_eq!(times, vec!["8:00 AM", "6:00 PM"]);
        assert_eq!(plan.recommended_foods()[0], "Senior pet food formula");
    }

    #[test]
    fn test_adult_keeps_base_amounts() {
        let plan = plan("3", "Beagle", "normal");
        assert_eq!(plan.daily_amount(), "2-3 cups");
        assert_eq!(plan.calories(), "800-1200 kcal");
        assert_eq!(plan.meals_per_day(), "2-3 meals");
        assert_eq!(plan.meal_schedule()[0].amount, "1.5 cups");
        assert!(plan.special_recommendations().is_empty());
        assert_eq!(plan.avoid_foods().len(), 6);
    }

    #[test]
    fn test_unparsable_age_is_adult() {
        assert_eq!(plan("unknown", "Beagle", "normal"), plan("3", "Beagle", "normal"));
    }

    #[test]
    fn test_overweight_retriever() {
        let plan = plan("3", "Golden Retriever", "overweight");
        assert_eq!(plan.daily_amount(), "Reduce by 20%");
        assert_eq!(plan.calories(), "Reduce by 20%");
        assert!(
            plan.recommended_foods()
                .contains(&"Weight management formula".to_string())
        );
        assert_eq!(
            plan.special_recommendations(),
            [
                "Monitor portion sizes - this breed is prone to overeating",
                "Include omega-3 fatty acids for coat health",
                "Increase exercise and reduce treats",
                "Use measuring cups for accurate portions",
            ]
        );
    }

    #[test]
    fn test_allergies_replace_recommended_foods() {
        let plan = plan("kitten", "Persian", "Allergies");
        assert_eq!(plan.recommended_foods(), ALLERGY_FOODS);
        assert_eq!(
            plan.avoid_foods()[0],
            "Common allergens (chicken, beef, wheat, corn)"
        );
        assert_eq!(plan.avoid_foods().len(), 7);
        // Young tier (3) + feline (2) + allergies (1).
        assert_eq!(plan.special_recommendations().len(), 6);
    }

    #[test]
    fn test_feline_appends_hairball_formula() {
        let plan = plan("2", "Siamese cat", "normal");
        assert_eq!(plan.recommended_foods().len(), 6);
        assert_eq!(
            plan.recommended_foods().last().map(String::as_str),
            Some("Hairball control formula")
        );
        assert_eq!(
            plan.special_recommendations(),
            ["Provide plenty of fresh water", "Consider wet food for hydration"]
        );
    }

    #[test]
    fn test_underweight_senior() {
        let plan = plan("9", "Beagle", "underweight");
        assert_eq!(plan.daily_amount(), "Increase by 15%");
        assert_eq!(plan.meals_per_day(), "2 meals");
        assert_eq!(
            plan.special_recommendations().last().map(String::as_str),
            Some("Add healthy fats to meals")
        );
    }

    #[test]
    fn test_diabetes_and_kidney_disease_append() {
        let diabetes = plan("4", "Beagle", "diabetes");
        assert_eq!(
            diabetes.recommended_foods().last().map(String::as_str),
            Some("High-fiber, low-carb diet")
        );
        assert_eq!(diabetes.special_recommendations().len(), 2);

        let kidney = plan("4", "Beagle", "Kidney Disease");
        assert_eq!(
            kidney.recommended_foods().last().map(String::as_str),
            Some("Low-phosphorus, moderate protein diet")
        );
        assert_eq!(
            kidney.special_recommendations(),
            ["Increase water intake", "Work closely with veterinarian"]
        );
    }

    #[test]
    fn test_unrecognized_condition_matches_normal() {
        assert_eq!(
            plan("4", "Labrador", "overwieght"),
            plan("4", "Labrador", "normal")
        );
    }

    #[test]
    fn test_capitalized_life_stage_word_is_adult() {
        let capitalized = plan("Puppy", "Beagle", "normal");
        assert_eq!(capitalized.meals_per_day(), "2-3 meals");
        assert_eq!(capitalized, plan("3", "Beagle", "normal"));
        assert_eq!(
            plan("Kitten, 3 months", "Beagle", "normal").meals_per_day(),
            "2-3 meals"
        );
    }

    #[test]
    fn test_padded_condition_applies_no_rules() {
        let padded = plan("4", "Beagle", " diabetes ");
        assert!(padded.special_recommendations().is_empty());
        assert_eq!(padded, plan("4", "Beagle", "normal"));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let first = plan("3", "Golden Retriever", "overweight");
        let mut second = plan("3", "Golden Retriever", "overweight");
        assert_eq!(first, second);

        second.recommended_foods.push("Extra".to_string());
        assert_ne!(first, second);
        assert_eq!(plan("3", "Golden Retriever", "overweight"), first);
    }
}
