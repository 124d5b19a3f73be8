use chrono::Local;
use derive_more::Deref;
use log::debug;
use uuid::Uuid;

use crate::{
    BiometricProfile, PlanError, PlanRequest, ReadError, ResolvedProfile, body_composition,
    cycling, macronutrients,
    meal_plan::{self, MealPlan, RotatingSelection},
    metabolism::CaloricBudget,
    report::{self, PartialFigures, Report},
};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MemberID(Uuid);

impl MemberID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for MemberID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for MemberID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// External member store supplying biometric profiles.
#[allow(async_fn_in_trait)]
pub trait MemberRepository {
    async fn read_profile(&self, id: MemberID) -> Result<BiometricProfile, ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub report: Report,
    pub meal_plan: MealPlan,
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: MemberRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validates the request, fetches the member's profile and runs the
    /// plan pipeline. Request validation is the only rejection point;
    /// every computation downstream is total.
    pub async fn plan(
        &self,
        member_id: MemberID,
        request: &PlanRequest,
    ) -> Result<PlanOutcome, PlanError> {
        request.validate()?;
        let profile = self.repository.read_profile(member_id).await?;
        let resolved = profile.resolve(Local::now().date_naive());
        debug!("generating plan for member {member_id:?}: {request:?}");
        Ok(plan(&resolved, request))
    }
}

/// The full pipeline over a resolved profile: caloric budget, macro
/// allocation, body composition, calorie cycling, meal plan, and the
/// consolidating normalization step.
#[must_use]
pub fn plan(profile: &ResolvedProfile, request: &PlanRequest) -> PlanOutcome {
    let budget = CaloricBudget::new(profile, request.activity_level, request.objective);
    let macros = macronutrients::allocate(profile, request.objective, request.morphotype, &budget);
    let figures = PartialFigures {
        budget: Some(budget),
        macros: Some(macros),
        body: Some(body_composition::analyze(profile)),
        cycling: Some(cycling::schedule(budget.target_calories)),
    };
    let report = report::normalize(figures, profile, request);
    let meal_plan = meal_plan::generate(
        budget.target_calories,
        request.meals_per_day,
        request.plan_days,
        &RotatingSelection,
    );
    PlanOutcome { report, meal_plan }
}
