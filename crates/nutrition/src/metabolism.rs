use crate::{
    ResolvedProfile, Sex,
    catalog::{ActivityLevel, Objective},
};

/// Basal metabolic rate according to Mifflin-St Jeor, rounded to the
/// nearest kcal.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn bmr(profile: &ResolvedProfile) -> i32 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f32::from(profile.age);
    let bmr = match profile.sex {
        Sex::MALE => base + 5.0,
        Sex::FEMALE => base - 161.0,
    };
    bmr.round() as i32
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn tdee(bmr: i32, activity_level: ActivityLevel) -> i32 {
    (bmr as f32 * activity_level.multiplier()).round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaloricBudget {
    pub bmr: i32,
    pub tdee: i32,
    pub target_calories: i32,
}

impl CaloricBudget {
    #[must_use]
    pub fn new(
        profile: &ResolvedProfile,
        activity_level: ActivityLevel,
        objective: Objective,
    ) -> CaloricBudget {
        let bmr = bmr(profile);
        let tdee = tdee(bmr, activity_level);
        CaloricBudget {
            bmr,
            tdee,
            target_calories: tdee + objective.adjustment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const MALE: ResolvedProfile = ResolvedProfile {
        weight: 70.0,
        height: 175.0,
        age: 30,
        sex: Sex::MALE,
        body_fat: 15.0,
    };

    const FEMALE: ResolvedProfile = ResolvedProfile {
        weight: 60.0,
        height: 165.0,
        age: 25,
        sex: Sex::FEMALE,
        body_fat: 22.0,
    };

    #[rstest]
    #[case::male(MALE, 1649)]
    #[case::female(FEMALE, 1345)]
    fn test_bmr(#[case] profile: ResolvedProfile, #[case] expected: i32) {
        assert_eq!(bmr(&profile), expected);
    }

    #[rstest]
    #[case::sedentary(ActivityLevel::Sedentary, 1979)]
    #[case::moderate(ActivityLevel::Moderate, 2556)]
    #[case::extreme(ActivityLevel::Extreme, 3133)]
    fn test_tdee(#[case] activity_level: ActivityLevel, #[case] expected: i32) {
        assert_eq!(tdee(1649, activity_level), expected);
    }

    #[rstest]
    #[case::maintenance(Objective::Maintenance, 2556)]
    #[case::weight_loss(Objective::WeightLoss, 2156)]
    #[case::muscle_gain(Objective::MuscleGain, 2856)]
    fn test_caloric_budget(#[case] objective: Objective, #[case] target: i32) {
        let budget = CaloricBudget::new(&MALE, ActivityLevel::Moderate, objective);
        assert_eq!(budget.bmr, 1649);
        assert_eq!(budget.tdee, 2556);
        assert_eq!(budget.target_calories, target);
        assert_eq!(budget.target_calories, budget.tdee + objective.adjustment());
    }
}
