//! Purple Suite rewards calculator: turns a member profile into the monthly
//! and annual value of every benefit, net of fees.

pub mod behaviours;
pub mod engine;
pub mod format;
pub mod ladders;

pub use behaviours::{assess_money_behaviours, MoneyBehaviourAssessment};
pub use engine::{evaluate, healthy_food_discount_pct, RewardsEngine};
pub use format::format_rand;
