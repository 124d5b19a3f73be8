use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use crate::{
    ResolvedProfile,
    catalog::{Morphotype, Objective},
    metabolism::CaloricBudget,
};

pub const KCAL_PER_G_PROTEIN: u32 = 4;
pub const KCAL_PER_G_CARBS: u32 = 4;
pub const KCAL_PER_G_FATS: u32 = 9;

/// A gram triple. Calories follow the 4/4/9 kcal-per-gram convention.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl Macros {
    #[must_use]
    pub fn calories(&self) -> u32 {
        self.protein * KCAL_PER_G_PROTEIN
            + self.carbs * KCAL_PER_G_CARBS
            + self.fats * KCAL_PER_G_FATS
    }

    #[must_use]
    pub fn scaled(&self, factor: f32) -> Macros {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scale = |grams: u32| (grams as f32 * factor).round().max(0.0) as u32;
        Macros {
            protein: scale(self.protein),
            carbs: scale(self.carbs),
            fats: scale(self.fats),
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Self) -> Self::Output {
        Macros {
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Self {
        iter.fold(Macros::default(), Add::add)
    }
}

/// Percentage triple summing to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein: u8,
    pub carbs: u8,
    pub fats: u8,
}

impl MacroSplit {
    /// Normalizes three raw percentages to a total of exactly 100. Protein
    /// and carbs are scaled and rounded individually, fats absorb the
    /// rounding drift.
    #[must_use]
    pub fn normalized(protein: f32, carbs: f32, fats: f32) -> MacroSplit {
        let sum = protein + carbs + fats;
        if sum <= 0.0 {
            return MacroSplit {
                protein: 0,
                carbs: 0,
                fats: 100,
            };
        }
        let scale = 100.0 / sum;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let protein = (protein.max(0.0) * scale).round().min(100.0) as u8;
        // Protein and carbs can each round up, so cap carbs before fats
        // take the remainder.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let carbs = ((carbs.max(0.0) * scale).round() as u8).min(100 - protein);
        let fats = 100 - protein - carbs;
        MacroSplit {
            protein,
            carbs,
            fats,
        }
    }

    #[must_use]
    pub fn total(&self) -> u8 {
        self.protein + self.carbs + self.fats
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTarget {
    pub grams: u32,
    pub per_kg: f32,
    pub calories: i32,
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub protein: MacroTarget,
    pub carbs: MacroTarget,
    pub fats: MacroTarget,
}

impl MacroTargets {
    #[must_use]
    pub fn grams(&self) -> Macros {
        Macros {
            protein: self.protein.grams,
            carbs: self.carbs.grams,
            fats: self.fats.grams,
        }
    }

    /// Total calories recomputed from the rounded gram values. The gram
    /// allocation keeps this within 3 kcal of the configured target.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn total_calories(&self) -> i32 {
        self.grams().calories() as i32
    }
}

/// Resolves the configured macro split and the gram breakdown for the
/// given caloric budget. Protein is taken from the objective unmodified,
/// the morphotype offsets apply to carbs and fats only. Protein and carb
/// grams come from their percentage shares, fats absorb the calories the
/// first two roundings leave behind.
#[must_use]
pub fn allocate(
    profile: &ResolvedProfile,
    objective: Objective,
    morphotype: Morphotype,
    budget: &CaloricBudget,
) -> MacroTargets {
    let base = objective.base_split();
    let split = MacroSplit::normalized(
        f32::from(base.protein),
        f32::from(base.carbs) + f32::from(morphotype.carb_offset()),
        f32::from(base.fats) + f32::from(morphotype.fat_offset()),
    );
    let target_calories = budget.target_calories;
    let protein_grams = grams_for_share(target_calories, split.protein, KCAL_PER_G_PROTEIN);
    let mut carbs_grams = grams_for_share(target_calories, split.carbs, KCAL_PER_G_CARBS);
    let fats_grams = fats_for_residual(target_calories, protein_grams, carbs_grams);
    // A fat gram moves the total in 9 kcal steps, so rounding the residual
    // can still leave the total 4 kcal off. One carb gram closes the gap.
    let grams = Macros {
        protein: protein_grams,
        carbs: carbs_grams,
        fats: fats_grams,
    };
    #[allow(clippy::cast_possible_wrap)]
    let deviation = grams.calories() as i32 - target_calories;
    if deviation > 3 {
        carbs_grams = carbs_grams.saturating_sub(1);
    } else if deviation < -3 {
        carbs_grams += 1;
    }
    MacroTargets {
        protein: target(protein_grams, split.protein, KCAL_PER_G_PROTEIN, profile.weight),
        carbs: target(carbs_grams, split.carbs, KCAL_PER_G_CARBS, profile.weight),
        fats: target(fats_grams, split.fats, KCAL_PER_G_FATS, profile.weight),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn grams_for_share(target_calories: i32, percent: u8, kcal_per_g: u32) -> u32 {
    let calories = (target_calories as f32 * f32::from(percent) / 100.0).round();
    (calories / kcal_per_g as f32).round().max(0.0) as u32
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn fats_for_residual(target_calories: i32, protein_grams: u32, carbs_grams: u32) -> u32 {
    let residual = target_calories
        - (protein_grams * KCAL_PER_G_PROTEIN + carbs_grams * KCAL_PER_G_CARBS) as i32;
    (residual as f32 / KCAL_PER_G_FATS as f32).round().max(0.0) as u32
}

fn target(grams: u32, percent: u8, kcal_per_g: u32, weight: f32) -> MacroTarget {
    #[allow(clippy::cast_possible_wrap)]
    let calories = (grams * kcal_per_g) as i32;
    #[allow(clippy::cast_precision_loss)]
    let per_kg = (grams as f32 / weight * 10.0).round() / 10.0;
    MacroTarget {
        grams,
        per_kg,
        calories,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Sex;

    const PROFILE: ResolvedProfile = ResolvedProfile {
        weight: 70.0,
        height: 175.0,
        age: 30,
        sex: Sex::MALE,
        body_fat: 15.0,
    };

    #[rstest]
    #[case::already_100(25.0, 45.0, 30.0, MacroSplit { protein: 25, carbs: 45, fats: 30 })]
    #[case::above_100(25.0, 55.0, 25.0, MacroSplit { protein: 24, carbs: 52, fats: 24 })]
    #[case::below_100(35.0, 30.0, 30.0, MacroSplit { protein: 37, carbs: 32, fats: 31 })]
    #[case::both_round_up(49.5, 50.5, 0.0, MacroSplit { protein: 50, carbs: 50, fats: 0 })]
    #[case::degenerate(0.0, 0.0, 0.0, MacroSplit { protein: 0, carbs: 0, fats: 100 })]
    fn test_normalized_split(
        #[case] protein: f32,
        #[case] carbs: f32,
        #[case] fats: f32,
        #[case] expected: MacroSplit,
    ) {
        let split = MacroSplit::normalized(protein, carbs, fats);
        assert_eq!(split, expected);
        assert_eq!(split.total(), 100);
    }

    #[rstest]
    #[case::maintenance(Objective::Maintenance, Morphotype::Mesomorph)]
    #[case::weight_loss(Objective::WeightLoss, Morphotype::Endomorph)]
    #[case::muscle_gain(Objective::MuscleGain, Morphotype::Ectomorph)]
    #[case::recomposition(Objective::Recomposition, Morphotype::Mesomorph)]
    fn test_allocate_percentages_sum_to_100(
        #[case] objective: Objective,
        #[case] morphotype: Morphotype,
    ) {
        let budget = CaloricBudget {
            bmr: 1649,
            tdee: 2556,
            target_calories: 2556 + objective.adjustment(),
        };
        let targets = allocate(&PROFILE, objective, morphotype, &budget);
        assert_eq!(
            targets.protein.percent + targets.carbs.percent + targets.fats.percent,
            100
        );
    }

    #[rstest]
    #[case::maintenance(Objective::Maintenance, Morphotype::Mesomorph, 2556)]
    #[case::weight_loss(Objective::WeightLoss, Morphotype::Ectomorph, 2156)]
    #[case::muscle_gain(Objective::MuscleGain, Morphotype::Endomorph, 2856)]
    #[case::sedentary_maintenance(Objective::Maintenance, Morphotype::Mesomorph, 2056)]
    fn test_allocate_closure_bound(
        #[case] objective: Objective,
        #[case] morphotype: Morphotype,
        #[case] target_calories: i32,
    ) {
        let budget = CaloricBudget {
            bmr: 1649,
            tdee: 2556,
            target_calories,
        };
        let targets = allocate(&PROFILE, objective, morphotype, &budget);
        assert!((targets.total_calories() - target_calories).abs() <= 3);
    }

    #[test]
    fn test_allocate_maintenance_moderate_male() {
        let budget = CaloricBudget {
            bmr: 1649,
            tdee: 2556,
            target_calories: 2556,
        };
        let targets = allocate(
            &PROFILE,
            Objective::Maintenance,
            Morphotype::Mesomorph,
            &budget,
        );
        assert_eq!(targets.protein.grams, 160);
        assert_eq!(targets.carbs.grams, 288);
        assert_eq!(targets.fats.grams, 85);
        assert_eq!(targets.protein.percent, 25);
        assert_eq!(targets.carbs.percent, 45);
        assert_eq!(targets.fats.percent, 30);
        assert_approx_eq!(targets.protein.per_kg, 2.3);
        assert_approx_eq!(targets.carbs.per_kg, 4.1);
        assert_approx_eq!(targets.fats.per_kg, 1.2);
    }

    #[test]
    fn test_allocate_carb_gram_closes_residual_gap() {
        // 2056 kcal at 25/45/30: the protein and carb shares both round up,
        // leaving a 616 kcal residual that 68 g of fat undershoots by 4.
        let budget = CaloricBudget {
            bmr: 1713,
            tdee: 2056,
            target_calories: 2056,
        };
        let targets = allocate(
            &PROFILE,
            Objective::Maintenance,
            Morphotype::Mesomorph,
            &budget,
        );
        assert_eq!(targets.protein.grams, 129);
        assert_eq!(targets.carbs.grams, 232);
        assert_eq!(targets.fats.grams, 68);
        assert_eq!(targets.total_calories(), 2056);
    }

    #[test]
    fn test_macros_arithmetic() {
        let breakfast = Macros {
            protein: 30,
            carbs: 55,
            fats: 14,
        };
        let lunch = Macros {
            protein: 45,
            carbs: 70,
            fats: 20,
        };
        let mut total = breakfast;
        total += lunch;
        assert_eq!(total, breakfast + lunch);
        assert_eq!([breakfast, lunch].into_iter().sum::<Macros>(), total);
        assert_eq!(breakfast.calories(), 30 * 4 + 55 * 4 + 14 * 9);
    }

    #[rstest]
    #[case::identity(1.0, Macros { protein: 30, carbs: 55, fats: 14 })]
    #[case::up(1.2, Macros { protein: 36, carbs: 66, fats: 17 })]
    #[case::down(0.7, Macros { protein: 21, carbs: 39, fats: 10 })]
    fn test_macros_scaled(#[case] factor: f32, #[case] expected: Macros) {
        assert_eq!(
            Macros {
                protein: 30,
                carbs: 55,
                fats: 14,
            }
            .scaled(factor),
            expected
        );
    }
}
