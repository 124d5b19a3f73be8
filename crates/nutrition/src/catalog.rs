use std::{fmt, slice::Iter};

use crate::{MacroSplit, Macros};

/// Training objective. Determines the daily calorie adjustment and the
/// base macro split before morphotype offsets are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    WeightLoss,
    Maintenance,
    MuscleGain,
    Recomposition,
}

impl Objective {
    pub fn iter() -> Iter<'static, Objective> {
        static OBJECTIVES: [Objective; 4] = [
            Objective::WeightLoss,
            Objective::Maintenance,
            Objective::MuscleGain,
            Objective::Recomposition,
        ];
        OBJECTIVES.iter()
    }

    /// Unknown keys fall back to maintenance.
    #[must_use]
    pub fn from_key(key: &str) -> Objective {
        match key {
            "weight_loss" => Objective::WeightLoss,
            "muscle_gain" => Objective::MuscleGain,
            "recomposition" => Objective::Recomposition,
            _ => Objective::Maintenance,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Objective::WeightLoss => "weight_loss",
            Objective::Maintenance => "maintenance",
            Objective::MuscleGain => "muscle_gain",
            Objective::Recomposition => "recomposition",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Objective::WeightLoss => "Weight Loss",
            Objective::Maintenance => "Maintenance",
            Objective::MuscleGain => "Muscle Gain",
            Objective::Recomposition => "Recomposition",
        }
    }

    /// Signed kcal/day added to the TDEE.
    #[must_use]
    pub fn adjustment(self) -> i32 {
        match self {
            Objective::WeightLoss => -400,
            Objective::Maintenance => 0,
            Objective::MuscleGain => 300,
            Objective::Recomposition => -200,
        }
    }

    /// Base percentages (protein, carbs, fats) before morphotype offsets.
    #[must_use]
    pub fn base_split(self) -> MacroSplit {
        let (protein, carbs, fats) = match self {
            Objective::WeightLoss => (35, 35, 30),
            Objective::Maintenance => (25, 45, 30),
            Objective::MuscleGain => (30, 45, 25),
            Objective::Recomposition => (35, 40, 25),
        };
        MacroSplit {
            protein,
            carbs,
            fats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    High,
    Extreme,
}

impl ActivityLevel {
    pub fn iter() -> Iter<'static, ActivityLevel> {
        static ACTIVITY_LEVELS: [ActivityLevel; 5] = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::High,
            ActivityLevel::Extreme,
        ];
        ACTIVITY_LEVELS.iter()
    }

    /// Unknown keys fall back to moderate.
    #[must_use]
    pub fn from_key(key: &str) -> ActivityLevel {
        match key {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "high" => ActivityLevel::High,
            "extreme" => ActivityLevel::Extreme,
            _ => ActivityLevel::Moderate,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::High => "Very Active",
            ActivityLevel::Extreme => "Extremely Active",
        }
    }

    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }
}

/// Body type. Biases the carb and fat percentages, protein is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Morphotype {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl Morphotype {
    pub fn iter() -> Iter<'static, Morphotype> {
        static MORPHOTYPES: [Morphotype; 3] = [
            Morphotype::Ectomorph,
            Morphotype::Mesomorph,
            Morphotype::Endomorph,
        ];
        MORPHOTYPES.iter()
    }

    /// Unknown keys fall back to mesomorph.
    #[must_use]
    pub fn from_key(key: &str) -> Morphotype {
        match key {
            "ectomorph" => Morphotype::Ectomorph,
            "endomorph" => Morphotype::Endomorph,
            _ => Morphotype::Mesomorph,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Morphotype::Ectomorph => "Ectomorph",
            Morphotype::Mesomorph => "Mesomorph",
            Morphotype::Endomorph => "Endomorph",
        }
    }

    #[must_use]
    pub fn carb_offset(self) -> i8 {
        match self {
            Morphotype::Ectomorph => 10,
            Morphotype::Mesomorph => 0,
            Morphotype::Endomorph => -10,
        }
    }

    #[must_use]
    pub fn fat_offset(self) -> i8 {
        match self {
            Morphotype::Ectomorph => -5,
            Morphotype::Mesomorph => 0,
            Morphotype::Endomorph => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Gram,
    Milliliter,
    Piece,
    Slice,
    Tablespoon,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Unit::Gram => "g",
                Unit::Milliliter => "ml",
                Unit::Piece => "piece",
                Unit::Slice => "slice",
                Unit::Tablespoon => "tbsp",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ingredient {
    pub name: &'static str,
    pub quantity: f32,
    pub unit: Unit,
}

/// Fixed-nutrient extra served alongside a meal. Never scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dessert {
    pub name: &'static str,
    pub calories: i32,
    pub macros: Macros,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTemplate {
    pub name: &'static str,
    pub calories: i32,
    pub macros: Macros,
    pub ingredients: &'static [Ingredient],
    pub dessert: Option<Dessert>,
}

#[must_use]
pub fn templates(slot: MealSlot) -> &'static [MealTemplate] {
    match slot {
        MealSlot::Breakfast => &BREAKFASTS,
        MealSlot::Lunch => &LUNCHES,
        MealSlot::Snack => &SNACKS,
        MealSlot::Dinner => &DINNERS,
    }
}

/// Calorie-distribution ratios per meal slot, keyed by meals per day.
/// Unknown values fall back to the four-meal table.
#[must_use]
pub fn meal_ratios(meals_per_day: u8) -> &'static [(MealSlot, f32)] {
    match meals_per_day {
        3 => &MEAL_RATIOS_3,
        5 => &MEAL_RATIOS_5,
        6 => &MEAL_RATIOS_6,
        _ => &MEAL_RATIOS_4,
    }
}

static MEAL_RATIOS_3: [(MealSlot, f32); 3] = [
    (MealSlot::Breakfast, 0.30),
    (MealSlot::Lunch, 0.40),
    (MealSlot::Dinner, 0.30),
];

static MEAL_RATIOS_4: [(MealSlot, f32); 4] = [
    (MealSlot::Breakfast, 0.25),
    (MealSlot::Lunch, 0.35),
    (MealSlot::Snack, 0.12),
    (MealSlot::Dinner, 0.28),
];

static MEAL_RATIOS_5: [(MealSlot, f32); 5] = [
    (MealSlot::Breakfast, 0.22),
    (MealSlot::Snack, 0.10),
    (MealSlot::Lunch, 0.30),
    (MealSlot::Snack, 0.12),
    (MealSlot::Dinner, 0.26),
];

static MEAL_RATIOS_6: [(MealSlot, f32); 6] = [
    (MealSlot::Breakfast, 0.20),
    (MealSlot::Snack, 0.10),
    (MealSlot::Lunch, 0.28),
    (MealSlot::Snack, 0.10),
    (MealSlot::Dinner, 0.24),
    (MealSlot::Snack, 0.08),
];

static BREAKFASTS: [MealTemplate; 4] = [
    MealTemplate {
        name: "Oatmeal with berries and whey",
        calories: 520,
        macros: Macros {
            protein: 32,
            carbs: 68,
            fats: 12,
        },
        ingredients: &[
            Ingredient {
                name: "Rolled oats",
                quantity: 80.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Whey protein powder",
                quantity: 30.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Blueberries",
                quantity: 100.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Semi-skimmed milk",
                quantity: 200.0,
                unit: Unit::Milliliter,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Scrambled eggs on toast",
        calories: 480,
        macros: Macros {
            protein: 28,
            carbs: 40,
            fats: 22,
        },
        ingredients: &[
            Ingredient {
                name: "Eggs",
                quantity: 3.0,
                unit: Unit::Piece,
            },
            Ingredient {
                name: "Wholegrain bread",
                quantity: 2.0,
                unit: Unit::Slice,
            },
            Ingredient {
                name: "Butter",
                quantity: 10.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Tomato",
                quantity: 1.0,
                unit: Unit::Piece,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Greek yogurt bowl",
        calories: 450,
        macros: Macros {
            protein: 35,
            carbs: 50,
            fats: 10,
        },
        ingredients: &[
            Ingredient {
                name: "Greek yogurt",
                quantity: 250.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Granola",
                quantity: 50.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Honey",
                quantity: 1.0,
                unit: Unit::Tablespoon,
            },
            Ingredient {
                name: "Banana",
                quantity: 1.0,
                unit: Unit::Piece,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Protein pancakes",
        calories: 550,
        macros: Macros {
            protein: 38,
            carbs: 62,
            fats: 15,
        },
        ingredients: &[
            Ingredient {
                name: "Rolled oats",
                quantity: 70.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Eggs",
                quantity: 2.0,
                unit: Unit::Piece,
            },
            Ingredient {
                name: "Whey protein powder",
                quantity: 30.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Maple syrup",
                quantity: 1.0,
                unit: Unit::Tablespoon,
            },
        ],
        dessert: Some(Dessert {
            name: "Dark chocolate square",
            calories: 55,
            macros: Macros {
                protein: 1,
                carbs: 5,
                fats: 3,
            },
        }),
    },
];

static LUNCHES: [MealTemplate; 4] = [
    MealTemplate {
        name: "Chicken, rice and vegetables",
        calories: 720,
        macros: Macros {
            protein: 52,
            carbs: 80,
            fats: 16,
        },
        ingredients: &[
            Ingredient {
                name: "Chicken breast",
                quantity: 180.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Basmati rice",
                quantity: 90.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Mixed vegetables",
                quantity: 150.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Olive oil",
                quantity: 1.0,
                unit: Unit::Tablespoon,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Salmon with potatoes and salad",
        calories: 780,
        macros: Macros {
            protein: 45,
            carbs: 60,
            fats: 35,
        },
        ingredients: &[
            Ingredient {
                name: "Salmon fillet",
                quantity: 160.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Potatoes",
                quantity: 250.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Green salad",
                quantity: 100.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Olive oil",
                quantity: 1.0,
                unit: Unit::Tablespoon,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Beef pasta bolognese",
        calories: 820,
        macros: Macros {
            protein: 48,
            carbs: 90,
            fats: 24,
        },
        ingredients: &[
            Ingredient {
                name: "Lean beef mince",
                quantity: 150.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Wholewheat pasta",
                quantity: 100.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Tomato sauce",
                quantity: 150.0,
                unit: Unit::Milliliter,
            },
            Ingredient {
                name: "Parmesan",
                quantity: 15.0,
                unit: Unit::Gram,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Turkey wrap with hummus",
        calories: 650,
        macros: Macros {
            protein: 42,
            carbs: 66,
            fats: 18,
        },
        ingredients: &[
            Ingredient {
                name: "Turkey breast",
                quantity: 140.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Tortilla",
                quantity: 2.0,
                unit: Unit::Piece,
            },
            Ingredient {
                name: "Hummus",
                quantity: 40.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Bell pepper",
                quantity: 80.0,
                unit: Unit::Gram,
            },
        ],
        dessert: Some(Dessert {
            name: "Fruit salad cup",
            calories: 70,
            macros: Macros {
                protein: 1,
                carbs: 16,
                fats: 0,
            },
        }),
    },
];

static SNACKS: [MealTemplate; 3] = [
    MealTemplate {
        name: "Cottage cheese with almonds",
        calories: 260,
        macros: Macros {
            protein: 24,
            carbs: 10,
            fats: 13,
        },
        ingredients: &[
            Ingredient {
                name: "Cottage cheese",
                quantity: 200.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Almonds",
                quantity: 15.0,
                unit: Unit::Gram,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Protein shake and banana",
        calories: 280,
        macros: Macros {
            protein: 26,
            carbs: 38,
            fats: 3,
        },
        ingredients: &[
            Ingredient {
                name: "Whey protein powder",
                quantity: 30.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Banana",
                quantity: 1.0,
                unit: Unit::Piece,
            },
            Ingredient {
                name: "Water",
                quantity: 300.0,
                unit: Unit::Milliliter,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Rice cakes with peanut butter",
        calories: 300,
        macros: Macros {
            protein: 10,
            carbs: 34,
            fats: 14,
        },
        ingredients: &[
            Ingredient {
                name: "Rice cakes",
                quantity: 3.0,
                unit: Unit::Piece,
            },
            Ingredient {
                name: "Peanut butter",
                quantity: 20.0,
                unit: Unit::Gram,
            },
        ],
        dessert: None,
    },
];

static DINNERS: [MealTemplate; 4] = [
    MealTemplate {
        name: "Cod with quinoa and broccoli",
        calories: 560,
        macros: Macros {
            protein: 45,
            carbs: 58,
            fats: 12,
        },
        ingredients: &[
            Ingredient {
                name: "Cod fillet",
                quantity: 180.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Quinoa",
                quantity: 80.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Broccoli",
                quantity: 150.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Olive oil",
                quantity: 1.0,
                unit: Unit::Tablespoon,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Chicken stir-fry with noodles",
        calories: 640,
        macros: Macros {
            protein: 44,
            carbs: 70,
            fats: 16,
        },
        ingredients: &[
            Ingredient {
                name: "Chicken breast",
                quantity: 160.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Egg noodles",
                quantity: 90.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Stir-fry vegetables",
                quantity: 150.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Soy sauce",
                quantity: 1.0,
                unit: Unit::Tablespoon,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Omelette with sweet potato",
        calories: 580,
        macros: Macros {
            protein: 36,
            carbs: 48,
            fats: 24,
        },
        ingredients: &[
            Ingredient {
                name: "Eggs",
                quantity: 3.0,
                unit: Unit::Piece,
            },
            Ingredient {
                name: "Sweet potato",
                quantity: 200.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Spinach",
                quantity: 80.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Feta",
                quantity: 30.0,
                unit: Unit::Gram,
            },
        ],
        dessert: None,
    },
    MealTemplate {
        name: "Tofu curry with rice",
        calories: 600,
        macros: Macros {
            protein: 30,
            carbs: 72,
            fats: 18,
        },
        ingredients: &[
            Ingredient {
                name: "Tofu",
                quantity: 150.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Jasmine rice",
                quantity: 80.0,
                unit: Unit::Gram,
            },
            Ingredient {
                name: "Curry sauce",
                quantity: 150.0,
                unit: Unit::Milliliter,
            },
            Ingredient {
                name: "Green beans",
                quantity: 100.0,
                unit: Unit::Gram,
            },
        ],
        dessert: Some(Dessert {
            name: "Coconut yogurt",
            calories: 90,
            macros: Macros {
                protein: 2,
                carbs: 8,
                fats: 5,
            },
        }),
    },
];
