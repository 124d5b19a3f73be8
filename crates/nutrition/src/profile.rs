use std::fmt;

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl From<u8> for Sex {
    fn from(value: u8) -> Self {
        match value {
            0 => Sex::FEMALE,
            _ => Sex::MALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

/// Biometric data as supplied by the member store. Every field may be
/// absent; [`BiometricProfile::resolve`] substitutes the documented
/// defaults exactly once, at the pipeline boundary.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BiometricProfile {
    pub weight: Option<f32>,
    pub height: Option<f32>,
    pub birthdate: Option<NaiveDate>,
    pub age: Option<u8>,
    pub sex: Option<Sex>,
    pub body_fat: Option<f32>,
}

impl BiometricProfile {
    pub const DEFAULT_WEIGHT: f32 = 70.0;
    pub const DEFAULT_HEIGHT: f32 = 175.0;
    pub const DEFAULT_AGE: u8 = 30;
    pub const DEFAULT_BODY_FAT: f32 = 15.0;

    /// A calendar-correct age derived from the birthdate takes precedence
    /// over a flat age.
    #[must_use]
    pub fn resolve(&self, reference: NaiveDate) -> ResolvedProfile {
        ResolvedProfile {
            weight: self.weight.unwrap_or(Self::DEFAULT_WEIGHT),
            height: self.height.unwrap_or(Self::DEFAULT_HEIGHT),
            age: self
                .birthdate
                .map(|birthdate| age_on(birthdate, reference))
                .or(self.age)
                .unwrap_or(Self::DEFAULT_AGE),
            sex: self.sex.unwrap_or(Sex::MALE),
            body_fat: self.body_fat.unwrap_or(Self::DEFAULT_BODY_FAT),
        }
    }
}

/// Fully populated profile consumed by all downstream calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProfile {
    pub weight: f32,
    pub height: f32,
    pub age: u8,
    pub sex: Sex,
    pub body_fat: f32,
}

impl ResolvedProfile {
    #[must_use]
    pub fn height_m(&self) -> f32 {
        self.height / 100.0
    }
}

#[must_use]
pub fn age_on(birthdate: NaiveDate, reference: NaiveDate) -> u8 {
    let mut age = reference.year() - birthdate.year();
    if (reference.month(), reference.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    u8::try_from(age.max(0)).unwrap_or(u8::MAX)
}
