use log::debug;

use crate::{BmiBand, PlanType, Profile, WorkoutPlan};

const OBESE_BMI: f64 = 30.0;
const OBESE_SESSION_MINUTES: u32 = 60;
const UNDERWEIGHT_SESSION_MINUTES: u32 = 45;
const SENIOR_AGE: u32 = 50;
const SENIOR_SESSIONS_PER_WEEK: u32 = 4;
const SENIOR_SESSION_MINUTES: u32 = 45;

/// Adjusts a freshly generated plan to the user's body.
///
/// The rules run in a fixed order and only ever lower values, so applying
/// them again leaves the plan unchanged.
pub fn optimize_plan(plan: &mut WorkoutPlan, profile: &Profile) {
    if profile.bmi() > OBESE_BMI {
        plan.session_minutes = plan.session_minutes.at_most(OBESE_SESSION_MINUTES);
    }

    if profile.bmi_band() == BmiBand::Underweight {
        if plan.plan_type == PlanType::Cardio {
            plan.plan_type = PlanType::Mixed;
        }
        plan.session_minutes = plan.session_minutes.at_most(UNDERWEIGHT_SESSION_MINUTES);
    }

    if profile.is_older_than(SENIOR_AGE) {
        plan.sessions_per_week = plan.sessions_per_week.at_most(SENIOR_SESSIONS_PER_WEEK);
        plan.session_minutes = plan.session_minutes.at_most(SENIOR_SESSION_MINUTES);
    }

    debug!(
        "optimized plan: {} {}x{} min for {} weeks",
        plan.plan_type, plan.sessions_per_week, plan.session_minutes, plan.duration_weeks
    );
}
