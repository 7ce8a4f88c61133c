pub mod config;
pub mod error;
pub mod member;
pub mod profile;

pub use config::{AppConfig, RewardsConfig};
pub use error::{PurpleError, PurpleResult};
pub use member::{
    BenefitCategory, MemberProfile, RewardBreakdown, TechPurchaseType, VitalityStatus,
};
