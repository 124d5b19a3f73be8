use crate::{
    BodyComposition, CaloricBudget, CyclingSchedule, MacroSplit, MacroTarget, MacroTargets,
    PlanRequest, ResolvedProfile, body_composition,
    catalog::Morphotype,
    cycling,
    macronutrients::{KCAL_PER_G_CARBS, KCAL_PER_G_FATS, KCAL_PER_G_PROTEIN},
};

pub const HYDRATION_ML_PER_KG: f32 = 35.0;

/// Upstream figures as they arrive from the pipeline, or partially, from
/// legacy callers. Anything absent is substituted with a documented
/// default during normalization.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PartialFigures {
    pub budget: Option<CaloricBudget>,
    pub macros: Option<MacroTargets>,
    pub body: Option<BodyComposition>,
    pub cycling: Option<CyclingSchedule>,
}

/// The single source of truth for every report page. Built once per plan
/// request; consumers format these figures and never re-derive them.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub budget: CaloricBudget,
    pub macros: MacroTargets,
    pub body: BodyComposition,
    pub cycling: CyclingSchedule,
    pub morphotype: Morphotype,
    pub hydration_ml: u32,
}

/// Consolidates all upstream figures into one immutable report model.
///
/// Macro percentages (and calories) are recomputed from the rounded gram
/// values actually present, not from the originally configured split, so
/// every page that shows a percentage agrees with the grams shown
/// elsewhere. The result may visibly deviate from the objective's
/// configured split by a point; that is the authoritative behavior, not
/// a reconciliation bug.
#[must_use]
pub fn normalize(
    figures: PartialFigures,
    profile: &ResolvedProfile,
    request: &PlanRequest,
) -> Report {
    let budget = figures
        .budget
        .unwrap_or_else(|| CaloricBudget::new(profile, request.activity_level, request.objective));
    let macros = figures
        .macros
        .unwrap_or_else(|| default_macros(profile, budget.target_calories));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hydration_ml = (profile.weight * HYDRATION_ML_PER_KG).round().max(0.0) as u32;
    Report {
        budget,
        macros: from_grams(&macros, profile.weight),
        body: figures
            .body
            .unwrap_or_else(|| body_composition::analyze(profile)),
        cycling: figures
            .cycling
            .unwrap_or_else(|| cycling::schedule(budget.target_calories)),
        morphotype: request.morphotype,
        hydration_ml,
    }
}

/// Defaults for callers that supply no macro breakdown: 2 g/kg protein,
/// 45 % of calories as carbs, 25 % as fats.
fn default_macros(profile: &ResolvedProfile, target_calories: i32) -> MacroTargets {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let grams = |value: f32| value.round().max(0.0) as u32;
    #[allow(clippy::cast_precision_loss)]
    let calories = target_calories as f32;
    let gram_target = |grams: u32| MacroTarget {
        grams,
        per_kg: 0.0,
        calories: 0,
        percent: 0,
    };
    MacroTargets {
        protein: gram_target(grams(2.0 * profile.weight)),
        carbs: gram_target(grams(calories * 0.45 / 4.0)),
        fats: gram_target(grams(calories * 0.25 / 9.0)),
    }
}

/// Rebuilds all derived macro fields from the rounded gram values, the
/// only authoritative input at this point.
fn from_grams(macros: &MacroTargets, weight: f32) -> MacroTargets {
    let protein_calories = macros.protein.grams * KCAL_PER_G_PROTEIN;
    let carb_calories = macros.carbs.grams * KCAL_PER_G_CARBS;
    let fat_calories = macros.fats.grams * KCAL_PER_G_FATS;
    #[allow(clippy::cast_precision_loss)]
    let split = MacroSplit::normalized(
        protein_calories as f32,
        carb_calories as f32,
        fat_calories as f32,
    );
    let target = |grams: u32, calories: u32, percent: u8| {
        #[allow(clippy::cast_precision_loss)]
        let per_kg = (grams as f32 / weight * 10.0).round() / 10.0;
        #[allow(clippy::cast_possible_wrap)]
        let calories = calories as i32;
        MacroTarget {
            grams,
            per_kg,
            calories,
            percent,
        }
    };
    MacroTargets {
        protein: target(macros.protein.grams, protein_calories, split.protein),
        carbs: target(macros.carbs.grams, carb_calories, split.carbs),
        fats: target(macros.fats.grams, fat_calories, split.fats),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ActivityLevel, Objective, Sex, macronutrients};

    const PROFILE: ResolvedProfile = ResolvedProfile {
        weight: 70.0,
        height: 175.0,
        age: 30,
        sex: Sex::MALE,
        body_fat: 15.0,
    };

    fn request() -> PlanRequest {
        PlanRequest {
            objective: Objective::Maintenance,
            activity_level: ActivityLevel::Moderate,
            morphotype: Morphotype::Mesomorph,
            ..PlanRequest::default()
        }
    }

    fn budget() -> CaloricBudget {
        CaloricBudget {
            bmr: 1649,
            tdee: 2556,
            target_calories: 2556,
        }
    }

    #[test]
    fn test_normalize_substitutes_all_defaults() {
        let report = normalize(PartialFigures::default(), &PROFILE, &request());
        assert_eq!(report.budget, budget());
        assert_eq!(report.macros.protein.grams, 140);
        assert_eq!(report.macros.carbs.grams, 288);
        assert_eq!(report.macros.fats.grams, 71);
        assert_eq!(report.body, crate::body_composition::analyze(&PROFILE));
        assert_eq!(report.cycling, crate::cycling::schedule(2556));
        assert_eq!(report.morphotype, Morphotype::Mesomorph);
        assert_eq!(report.hydration_ml, 2450);
    }

    #[test]
    fn test_normalize_percent_recomputed_from_grams() {
        // Grams configured as a 30/40/30 split, but the rounded values
        // imply 28/38/34; the report shows the latter.
        let macros = MacroTargets {
            protein: MacroTarget {
                grams: 150,
                per_kg: 0.0,
                calories: 0,
                percent: 30,
            },
            carbs: MacroTarget {
                grams: 200,
                per_kg: 0.0,
                calories: 0,
                percent: 40,
            },
            fats: MacroTarget {
                grams: 80,
                per_kg: 0.0,
                calories: 0,
                percent: 30,
            },
        };
        let report = normalize(
            PartialFigures {
                macros: Some(macros),
                ..PartialFigures::default()
            },
            &PROFILE,
            &request(),
        );
        assert_eq!(report.macros.protein.percent, 28);
        assert_eq!(report.macros.carbs.percent, 38);
        assert_eq!(report.macros.fats.percent, 34);
        assert_eq!(
            report.macros.protein.percent
                + report.macros.carbs.percent
                + report.macros.fats.percent,
            100
        );
        assert_eq!(report.macros.protein.calories, 600);
        assert_eq!(report.macros.carbs.calories, 800);
        assert_eq!(report.macros.fats.calories, 720);
    }

    #[test]
    fn test_normalize_percent_sum_stays_100_when_both_round_up() {
        // 99 g protein and 101 g carbs are 49.5 % and 50.5 % of calories;
        // both percentages round up, carbs must yield the extra point.
        let gram_target = |grams: u32| MacroTarget {
            grams,
            per_kg: 0.0,
            calories: 0,
            percent: 0,
        };
        let macros = MacroTargets {
            protein: gram_target(99),
            carbs: gram_target(101),
            fats: gram_target(0),
        };
        let report = normalize(
            PartialFigures {
                macros: Some(macros),
                ..PartialFigures::default()
            },
            &PROFILE,
            &request(),
        );
        assert_eq!(report.macros.protein.percent, 50);
        assert_eq!(report.macros.carbs.percent, 50);
        assert_eq!(report.macros.fats.percent, 0);
        assert_eq!(
            report.macros.protein.percent
                + report.macros.carbs.percent
                + report.macros.fats.percent,
            100
        );
    }

    #[test]
    fn test_normalize_keeps_present_figures() {
        let macros = macronutrients::allocate(
            &PROFILE,
            Objective::Maintenance,
            Morphotype::Mesomorph,
            &budget(),
        );
        let report = normalize(
            PartialFigures {
                budget: Some(budget()),
                macros: Some(macros),
                ..PartialFigures::default()
            },
            &PROFILE,
            &request(),
        );
        assert_eq!(report.budget, budget());
        assert_eq!(report.macros.grams(), macros.grams());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let first = normalize(PartialFigures::default(), &PROFILE, &request());
        let second = normalize(PartialFigures::default(), &PROFILE, &request());
        assert_eq!(first, second);
    }
}
