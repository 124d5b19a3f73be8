use std::collections::BTreeMap;

use crate::{
    Macros,
    catalog::{self, MealSlot, MealTemplate, Unit},
};

pub const MIN_SCALE: f32 = 0.7;
pub const MAX_SCALE: f32 = 1.3;

/// Strategy for picking a template out of a slot's catalog. The returned
/// index is taken modulo the catalog length.
pub trait TemplateSelection {
    fn index(&self, slot: MealSlot, day: u32, len: usize) -> usize;
}

/// Default selection: cycle through the slot's templates by day index.
/// Deterministic, so generated plans are reproducible.
pub struct RotatingSelection;

impl TemplateSelection for RotatingSelection {
    fn index(&self, _: MealSlot, day: u32, len: usize) -> usize {
        day as usize % len
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredient {
    pub name: &'static str,
    pub quantity: f32,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledMeal {
    pub slot: MealSlot,
    pub name: &'static str,
    pub calories: i32,
    pub macros: Macros,
    pub ingredients: Vec<ScaledIngredient>,
    pub scale_factor: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub meals: Vec<ScaledMeal>,
    pub total_macros: Macros,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
}

/// Generates a multi-day meal plan for the given daily calorie target.
///
/// Each day distributes the target over the slot ratio table for
/// `meals_per_day` (unknown values fall back to the four-meal table) and
/// scales the selected template towards the slot's calorie allocation.
/// Because the scale factor is clamped, a day's total may deviate from
/// the target when a template is far off its slot's allocation; the
/// remaining slack is accepted.
#[must_use]
pub fn generate(
    target_calories: i32,
    meals_per_day: u8,
    plan_days: u32,
    selection: &dyn TemplateSelection,
) -> MealPlan {
    let ratios = catalog::meal_ratios(meals_per_day);
    let days = (1..=plan_days)
        .map(|day| {
            let mut occurrences: BTreeMap<MealSlot, u32> = BTreeMap::new();
            let meals = ratios
                .iter()
                .map(|&(slot, ratio)| {
                    let templates = catalog::templates(slot);
                    // Repeated slots advance the rotation so that a day's
                    // snacks are not all identical.
                    let occurrence = occurrences.entry(slot).or_insert(0);
                    let index = selection.index(slot, day + *occurrence, templates.len())
                        % templates.len();
                    *occurrence += 1;
                    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                    let slot_calories = (target_calories as f32 * ratio).round() as i32;
                    scale(slot, &templates[index], slot_calories)
                })
                .collect::<Vec<_>>();
            let total_macros = meals.iter().map(|m| m.macros).sum();
            DayPlan { meals, total_macros }
        })
        .collect();
    MealPlan { days }
}

/// Scales a template towards the slot's calorie allocation. Ingredient
/// quantities are rounded to one decimal, macros to whole grams. A
/// dessert's fixed nutrients are added on top, unscaled.
#[must_use]
pub fn scale(slot: MealSlot, template: &MealTemplate, target_calories: i32) -> ScaledMeal {
    #[allow(clippy::cast_precision_loss)]
    let scale_factor =
        (target_calories as f32 / template.calories as f32).clamp(MIN_SCALE, MAX_SCALE);
    let ingredients = template
        .ingredients
        .iter()
        .map(|i| ScaledIngredient {
            name: i.name,
            quantity: (i.quantity * scale_factor * 10.0).round() / 10.0,
            unit: i.unit,
        })
        .collect();
    let mut macros = template.macros.scaled(scale_factor);
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let mut calories = (template.calories as f32 * scale_factor).round() as i32;
    if let Some(dessert) = &template.dessert {
        macros += dessert.macros;
        calories += dessert.calories;
    }
    ScaledMeal {
        slot,
        name: template.name,
        calories,
        macros,
        ingredients,
        scale_factor,
    }
}
