use chrono::Weekday;

use crate::{
    RequestError,
    catalog::{ActivityLevel, Morphotype, Objective},
};

/// Immutable plan request assembled by the UI wizard. Unknown objective,
/// activity level or morphotype keys have already been mapped to their
/// fallbacks by the `from_key` constructors; range errors are the only
/// way a request can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub objective: Objective,
    pub activity_level: ActivityLevel,
    pub morphotype: Morphotype,
    pub meals_per_day: u8,
    pub plan_days: u32,
    pub training_days: Vec<Weekday>,
    pub calorie_cycling: bool,
}

impl PlanRequest {
    pub const MIN_MEALS_PER_DAY: u8 = 3;
    pub const MAX_MEALS_PER_DAY: u8 = 6;
    pub const MAX_PLAN_DAYS: u32 = 31;

    pub fn validate(&self) -> Result<(), RequestError> {
        if !(Self::MIN_MEALS_PER_DAY..=Self::MAX_MEALS_PER_DAY).contains(&self.meals_per_day) {
            return Err(RequestError::MealsPerDayOutOfRange(self.meals_per_day));
        }
        if !(1..=Self::MAX_PLAN_DAYS).contains(&self.plan_days) {
            return Err(RequestError::PlanDaysOutOfRange(self.plan_days));
        }
        Ok(())
    }
}

impl Default for PlanRequest {
    fn default() -> Self {
        PlanRequest {
            objective: Objective::Maintenance,
            activity_level: ActivityLevel::Moderate,
            morphotype: Morphotype::Mesomorph,
            meals_per_day: 4,
            plan_days: 7,
            training_days: Vec::new(),
            calorie_cycling: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::minimum(3, 1, Ok(()))]
    #[case::maximum(6, 31, Ok(()))]
    #[case::too_few_meals(2, 7, Err(RequestError::MealsPerDayOutOfRange(2)))]
    #[case::too_many_meals(7, 7, Err(RequestError::MealsPerDayOutOfRange(7)))]
    #[case::zero_days(4, 0, Err(RequestError::PlanDaysOutOfRange(0)))]
    #[case::too_many_days(4, 32, Err(RequestError::PlanDaysOutOfRange(32)))]
    fn test_validate(
        #[case] meals_per_day: u8,
        #[case] plan_days: u32,
        #[case] expected: Result<(), RequestError>,
    ) {
        let request = PlanRequest {
            meals_per_day,
            plan_days,
            ..PlanRequest::default()
        };
        assert_eq!(request.validate(), expected);
    }

    #[test]
    fn test_default_request_is_valid() {
        assert_eq!(PlanRequest::default().validate(), Ok(()));
    }
}
