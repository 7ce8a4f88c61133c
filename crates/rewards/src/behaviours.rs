//! Vitality Money behaviour scoring for the two behaviours a profile can
//! speak to: holding enough emergency savings, and keeping unsecured debt
//! repayments small relative to income.

use purple_core::MemberProfile;
use serde::{Deserialize, Serialize};

/// Points available per behaviour.
pub const MAX_BEHAVIOUR_POINTS: u32 = 30_000;
/// Emergency savings target, in months of gross income.
pub const SAVINGS_TARGET_MONTHS: f64 = 3.0;
/// Debt repayments at or below this share of income earn full points.
pub const DEBT_TARGET_PCT: f64 = 5.0;
/// Points lost per percentage point above the debt target.
pub const DEBT_POINTS_PER_PCT: f64 = 3_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyBehaviourAssessment {
    pub savings_target: f64,
    /// `None` when there is no income to measure against.
    pub savings_ratio: Option<f64>,
    /// Progress toward the savings target, 0–100.
    pub savings_progress_pct: f64,
    pub savings_points: u32,
    /// Debt repayment as a percentage of income.
    pub debt_ratio_pct: Option<f64>,
    pub debt_points: u32,
}

impl MoneyBehaviourAssessment {
    pub fn total_points(&self) -> u32 {
        self.savings_points + self.debt_points
    }
}

/// Score the savings and debt behaviours. Income is the only divisor; a
/// member without positive income scores nothing rather than dividing by it.
pub fn assess_money_behaviours(profile: &MemberProfile) -> MoneyBehaviourAssessment {
    let income = profile.monthly_income;
    let savings_target = income * SAVINGS_TARGET_MONTHS;

    if income <= 0.0 {
        return MoneyBehaviourAssessment {
            savings_target: savings_target.max(0.0),
            savings_ratio: None,
            savings_progress_pct: 0.0,
            savings_points: 0,
            debt_ratio_pct: None,
            debt_points: 0,
        };
    }

    let savings_ratio = profile.emergency_savings / savings_target;
    let savings_progress_pct = (savings_ratio * 100.0).clamp(0.0, 100.0);
    let savings_points = if savings_ratio >= 1.0 {
        MAX_BEHAVIOUR_POINTS
    } else {
        to_points(MAX_BEHAVIOUR_POINTS as f64 * savings_ratio)
    };

    let debt_ratio_pct = profile.monthly_unsecured_debt_repayment / income * 100.0;
    let debt_points = if debt_ratio_pct <= DEBT_TARGET_PCT {
        MAX_BEHAVIOUR_POINTS
    } else {
        let penalty = (debt_ratio_pct - DEBT_TARGET_PCT) * DEBT_POINTS_PER_PCT;
        to_points(MAX_BEHAVIOUR_POINTS as f64 - penalty)
    };

    MoneyBehaviourAssessment {
        savings_target,
        savings_ratio: Some(savings_ratio),
        savings_progress_pct,
        savings_points,
        debt_ratio_pct: Some(debt_ratio_pct),
        debt_points,
    }
}

fn to_points(raw: f64) -> u32 {
    raw.floor().clamp(0.0, MAX_BEHAVIOUR_POINTS as f64) as u32
}
