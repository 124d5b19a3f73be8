use crate::ResolvedProfile;

/// Muscularity classification by FFMI. Buckets are ordered and
/// exhaustive, any value at or above the last floor classifies as elite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfmiCategory {
    Low,
    Normal,
    Athletic,
    Excellent,
    Elite,
}

impl FfmiCategory {
    const BUCKETS: [(f32, FfmiCategory); 4] = [
        (16.0, FfmiCategory::Low),
        (18.0, FfmiCategory::Normal),
        (20.0, FfmiCategory::Athletic),
        (25.0, FfmiCategory::Excellent),
    ];

    #[must_use]
    pub fn of(ffmi: f32) -> FfmiCategory {
        for (upper, category) in Self::BUCKETS {
            if ffmi < upper {
                return category;
            }
        }
        FfmiCategory::Elite
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FfmiCategory::Low => "Low",
            FfmiCategory::Normal => "Normal",
            FfmiCategory::Athletic => "Athletic",
            FfmiCategory::Excellent => "Excellent",
            FfmiCategory::Elite => "Elite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyComposition {
    pub weight: f32,
    pub body_fat: f32,
    pub fat_mass: f32,
    pub lean_mass: f32,
    pub ffmi: f32,
    pub category: FfmiCategory,
}

/// Fat mass, lean mass and FFMI from weight, body fat percentage and
/// height. All figures rounded to one decimal.
#[must_use]
pub fn analyze(profile: &ResolvedProfile) -> BodyComposition {
    let fat_mass = profile.weight * profile.body_fat / 100.0;
    let lean_mass = profile.weight - fat_mass;
    let ffmi = lean_mass / (profile.height_m() * profile.height_m());
    BodyComposition {
        weight: round_tenth(profile.weight),
        body_fat: round_tenth(profile.body_fat),
        fat_mass: round_tenth(fat_mass),
        lean_mass: round_tenth(lean_mass),
        ffmi: round_tenth(ffmi),
        category: FfmiCategory::of(ffmi),
    }
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
