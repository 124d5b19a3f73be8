use std::slice::Iter;

/// Weekly activity tier. The calorie offsets are fixed constants, not
/// derived from measured activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTier {
    Rest,
    Light,
    Moderate,
    High,
}

impl ActivityTier {
    pub fn iter() -> Iter<'static, ActivityTier> {
        static TIERS: [ActivityTier; 4] = [
            ActivityTier::Rest,
            ActivityTier::Light,
            ActivityTier::Moderate,
            ActivityTier::High,
        ];
        TIERS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ActivityTier::Rest => "Rest Day",
            ActivityTier::Light => "Light Training",
            ActivityTier::Moderate => "Moderate Training",
            ActivityTier::High => "High-Intensity Training",
        }
    }

    /// Signed kcal offset added to the target calories.
    #[must_use]
    pub fn offset(self) -> i32 {
        match self {
            ActivityTier::Rest => -200,
            ActivityTier::Light => 0,
            ActivityTier::Moderate => 150,
            ActivityTier::High => 400,
        }
    }

    /// Constant estimated workout burn shown next to the tier.
    #[must_use]
    pub fn estimated_burn(self) -> i32 {
        match self {
            ActivityTier::Rest => 0,
            ActivityTier::Light => 250,
            ActivityTier::Moderate => 450,
            ActivityTier::High => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclingTier {
    pub tier: ActivityTier,
    pub estimated_burn: i32,
    pub total_calories: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclingSchedule {
    pub rest: CyclingTier,
    pub light: CyclingTier,
    pub moderate: CyclingTier,
    pub high: CyclingTier,
}

impl CyclingSchedule {
    #[must_use]
    pub fn tiers(&self) -> [CyclingTier; 4] {
        [self.rest, self.light, self.moderate, self.high]
    }
}

#[must_use]
pub fn schedule(target_calories: i32) -> CyclingSchedule {
    let tier = |tier: ActivityTier| CyclingTier {
        tier,
        estimated_burn: tier.estimated_burn(),
        total_calories: target_calories + tier.offset(),
    };
    CyclingSchedule {
        rest: tier(ActivityTier::Rest),
        light: tier(ActivityTier::Light),
        moderate: tier(ActivityTier::Moderate),
        high: tier(ActivityTier::High),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::typical(2556)]
    #[case::low(1200)]
    #[case::high(4000)]
    fn test_schedule_spread(#[case] target_calories: i32) {
        let schedule = schedule(target_calories);
        assert_eq!(
            schedule.high.total_calories - schedule.rest.total_calories,
            600
        );
        assert_eq!(schedule.light.total_calories, target_calories);
    }

    #[test]
    fn test_schedule_totals() {
        let schedule = schedule(2556);
        assert_eq!(
            schedule
                .tiers()
                .iter()
                .map(|t| t.total_calories)
                .collect::<Vec<_>>(),
            vec![2356, 2556, 2706, 2956]
        );
    }

    #[test]
    fn test_tier_order_matches_offsets() {
        let offsets = ActivityTier::iter()
            .map(|t| t.offset())
            .collect::<Vec<_>>();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
    }
}
