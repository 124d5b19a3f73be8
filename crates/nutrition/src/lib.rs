#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod body_composition;
mod cycling;
mod error;
mod macronutrients;
mod meal_plan;
mod metabolism;
mod profile;
mod report;
mod request;
mod service;

pub use body_composition::{BodyComposition, FfmiCategory, analyze};
pub use catalog::{ActivityLevel, MealSlot, Morphotype, Objective};
pub use cycling::{ActivityTier, CyclingSchedule, CyclingTier, schedule};
pub use error::{PlanError, ReadError, RequestError, StorageError};
pub use macronutrients::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FATS, KCAL_PER_G_PROTEIN, MacroSplit, MacroTarget, MacroTargets,
    Macros, allocate,
};
pub use meal_plan::{
    DayPlan, MAX_SCALE, MIN_SCALE, MealPlan, RotatingSelection, ScaledIngredient, ScaledMeal,
    TemplateSelection, generate,
};
pub use metabolism::{CaloricBudget, bmr, tdee};
pub use profile::{BiometricProfile, ResolvedProfile, Sex, age_on};
pub use report::{HYDRATION_ML_PER_KG, PartialFigures, Report, normalize};
pub use request::PlanRequest;
pub use service::{MemberID, MemberRepository, PlanOutcome, Service, plan};
