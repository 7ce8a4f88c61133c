//! Member domain types for the Purple Suite rewards estimator.
//!
//! A [`MemberProfile`] is an immutable snapshot of one evaluation request;
//! a [`RewardBreakdown`] is the value computed from it. Neither carries an
//! identity or survives beyond a single evaluation.

use serde::{Deserialize, Serialize};

// ─── Status Tiers ───────────────────────────────────────────────────────────

/// Vitality status level. Used for both the Health and the Money programme;
/// benefit level increases monotonically from Blue to Diamond.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum VitalityStatus {
    #[default]
    #[serde(alias = "blue")]
    Blue,
    #[serde(alias = "bronze")]
    Bronze,
    #[serde(alias = "silver")]
    Silver,
    #[serde(alias = "gold")]
    Gold,
    #[serde(alias = "diamond")]
    Diamond,
    /// Any status name the tables do not know. Earns no discount and
    /// ranks below Blue.
    #[serde(other)]
    Unrecognized,
}

impl VitalityStatus {
    /// All recognised statuses, lowest first.
    pub const LADDER: [VitalityStatus; 5] = [
        VitalityStatus::Blue,
        VitalityStatus::Bronze,
        VitalityStatus::Silver,
        VitalityStatus::Gold,
        VitalityStatus::Diamond,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VitalityStatus::Unrecognized => "Unrecognized",
            VitalityStatus::Blue => "Blue",
            VitalityStatus::Bronze => "Bronze",
            VitalityStatus::Silver => "Silver",
            VitalityStatus::Gold => "Gold",
            VitalityStatus::Diamond => "Diamond",
        }
    }

    pub fn is_diamond(&self) -> bool {
        matches!(self, VitalityStatus::Diamond)
    }

    /// Position on the status ladder; `Unrecognized` sits below Blue.
    pub fn rank(&self) -> u8 {
        match self {
            VitalityStatus::Unrecognized => 0,
            VitalityStatus::Blue => 1,
            VitalityStatus::Bronze => 2,
            VitalityStatus::Silver => 3,
            VitalityStatus::Gold => 4,
            VitalityStatus::Diamond => 5,
        }
    }
}

impl PartialOrd for VitalityStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VitalityStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Case-insensitive, never fails: unknown names become `Unrecognized`.
impl From<&str> for VitalityStatus {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "blue" => VitalityStatus::Blue,
            "bronze" => VitalityStatus::Bronze,
            "silver" => VitalityStatus::Silver,
            "gold" => VitalityStatus::Gold,
            "diamond" => VitalityStatus::Diamond,
            _ => VitalityStatus::Unrecognized,
        }
    }
}

impl std::fmt::Display for VitalityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Partner behind a discounted tech purchase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum TechPurchaseType {
    #[default]
    #[serde(alias = "none")]
    None,
    #[serde(alias = "apple")]
    Apple,
    #[serde(alias = "technogym")]
    Technogym,
}

// ─── Member Profile ─────────────────────────────────────────────────────────

/// Everything the calculator needs to know about one member.
///
/// Currency fields are rand amounts; `monthly_*` fields are per month.
/// Values are not validated: negative inputs flow through the arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberProfile {
    pub monthly_income: f64,
    pub vitality_health_status: VitalityStatus,
    pub vitality_money_status: VitalityStatus,

    pub monthly_card_spend: f64,
    pub monthly_healthy_food_spend: f64,
    pub monthly_healthy_care_spend: f64,
    pub monthly_fuel_spend: f64,
    pub monthly_home_partner_spend: f64,
    pub monthly_travel_spend: f64,

    pub has_gym_membership: bool,
    pub has_international_business_trip: bool,
    pub has_local_flights: bool,
    pub has_tech_purchase: bool,
    pub tech_purchase_type: TechPurchaseType,
    /// One-off purchase amount, not monthly.
    pub tech_purchase_amount: f64,

    pub emergency_savings: f64,
    pub monthly_unsecured_debt_repayment: f64,
    pub has_life_insurance: bool,
    pub has_short_term_insurance: bool,
    pub has_medical_aid: bool,

    pub monthly_miles_earned: f64,
    pub uses_miles_d_day: bool,
    pub uses_virtual_card: bool,
    pub lounge_visits_per_year: u32,
}

impl MemberProfile {
    /// The inputs the estimator opens with: a Gold/Gold member with a
    /// typical spread of spend and every lifestyle benefit switched on.
    pub fn estimator_preset() -> Self {
        Self {
            monthly_income: 250_000.0,
            vitality_health_status: VitalityStatus::Gold,
            vitality_money_status: VitalityStatus::Gold,
            monthly_card_spend: 50_000.0,
            monthly_healthy_food_spend: 5_000.0,
            monthly_healthy_care_spend: 2_000.0,
            monthly_fuel_spend: 5_000.0,
            monthly_home_partner_spend: 3_000.0,
            monthly_travel_spend: 2_000.0,
            has_gym_membership: true,
            has_international_business_trip: true,
            has_local_flights: true,
            has_tech_purchase: true,
            tech_purchase_type: TechPurchaseType::Apple,
            tech_purchase_amount: 25_000.0,
            emergency_savings: 750_000.0,
            monthly_unsecured_debt_repayment: 5_000.0,
            has_life_insurance: true,
            has_short_term_insurance: true,
            has_medical_aid: true,
            monthly_miles_earned: 5_000.0,
            uses_miles_d_day: true,
            uses_virtual_card: true,
            lounge_visits_per_year: 12,
        }
    }
}

// ─── Reward Breakdown ───────────────────────────────────────────────────────

/// Monthly benefit categories, in presentation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BenefitCategory {
    HealthyFood,
    HealthyCare,
    Fuel,
    HomePartner,
    Gym,
    LocalFlights,
    InternationalFlights,
    Accommodation,
    Tech,
    Lounge,
    MilesDDay,
    DynamicInterest,
    SportsGear,
    PriorityFastTrack,
    RelationshipBanker,
    Concierge,
    VirtualCards,
}

impl BenefitCategory {
    pub const ALL: [BenefitCategory; 17] = [
        BenefitCategory::HealthyFood,
        BenefitCategory::HealthyCare,
        BenefitCategory::Fuel,
        BenefitCategory::HomePartner,
        BenefitCategory::Gym,
        BenefitCategory::LocalFlights,
        BenefitCategory::InternationalFlights,
        BenefitCategory::Accommodation,
        BenefitCategory::Tech,
        BenefitCategory::Lounge,
        BenefitCategory::MilesDDay,
        BenefitCategory::DynamicInterest,
        BenefitCategory::SportsGear,
        BenefitCategory::PriorityFastTrack,
        BenefitCategory::RelationshipBanker,
        BenefitCategory::Concierge,
        BenefitCategory::VirtualCards,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BenefitCategory::HealthyFood => "HealthyFood",
            BenefitCategory::HealthyCare => "HealthyCare",
            BenefitCategory::Fuel => "Fuel",
            BenefitCategory::HomePartner => "Home partners",
            BenefitCategory::Gym => "Gym (Virgin Active Collection)",
            BenefitCategory::LocalFlights => "Local flights",
            BenefitCategory::InternationalFlights => "International business class",
            BenefitCategory::Accommodation => "Accommodation & car hire",
            BenefitCategory::Tech => "Tech purchase",
            BenefitCategory::Lounge => "Lounge access",
            BenefitCategory::MilesDDay => "Miles D-Day",
            BenefitCategory::DynamicInterest => "Dynamic interest",
            BenefitCategory::SportsGear => "Sports gear",
            BenefitCategory::PriorityFastTrack => "Priority fast track",
            BenefitCategory::RelationshipBanker => "Relationship banker",
            BenefitCategory::Concierge => "Concierge",
            BenefitCategory::VirtualCards => "Virtual cards",
        }
    }
}

/// Result of one evaluation. Every category value is a monthly figure;
/// annual benefits have already been amortized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub monthly_fees: f64,
    pub annual_fees: f64,

    pub healthy_food_savings: f64,
    pub healthy_care_savings: f64,
    pub fuel_savings: f64,
    pub home_partner_savings: f64,
    pub gym_savings: f64,
    pub local_flight_savings_monthly: f64,
    pub international_flight_savings_monthly: f64,
    pub accommodation_savings: f64,
    pub tech_savings_monthly: f64,
    pub lounge_value: f64,
    pub miles_d_day_value: f64,
    pub dynamic_interest_savings: f64,
    pub sports_gear_savings: f64,
    pub priority_fast_track_value: f64,
    pub relationship_banker_value: f64,
    pub concierge_value: f64,
    pub virtual_cards_value: f64,

    pub total_monthly_value: f64,
    pub total_annual_value: f64,
    pub net_monthly_profit: f64,
    pub net_annual_profit: f64,
}

impl RewardBreakdown {
    /// Monthly value of a single category.
    pub fn value_of(&self, category: BenefitCategory) -> f64 {
        match category {
            BenefitCategory::HealthyFood => self.healthy_food_savings,
            BenefitCategory::HealthyCare => self.healthy_care_savings,
            BenefitCategory::Fuel => self.fuel_savings,
            BenefitCategory::HomePartner => self.home_partner_savings,
            BenefitCategory::Gym => self.gym_savings,
            BenefitCategory::LocalFlights => self.local_flight_savings_monthly,
            BenefitCategory::InternationalFlights => self.international_flight_savings_monthly,
            BenefitCategory::Accommodation => self.accommodation_savings,
            BenefitCategory::Tech => self.tech_savings_monthly,
            BenefitCategory::Lounge => self.lounge_value,
            BenefitCategory::MilesDDay => self.miles_d_day_value,
            BenefitCategory::DynamicInterest => self.dynamic_interest_savings,
            BenefitCategory::SportsGear => self.sports_gear_savings,
            BenefitCategory::PriorityFastTrack => self.priority_fast_track_value,
            BenefitCategory::RelationshipBanker => self.relationship_banker_value,
            BenefitCategory::Concierge => self.concierge_value,
            BenefitCategory::VirtualCards => self.virtual_cards_value,
        }
    }

    /// All 17 categories with their monthly values, zeros included.
    pub fn line_items(&self) -> Vec<(BenefitCategory, f64)> {
        BenefitCategory::ALL
            .iter()
            .map(|c| (*c, self.value_of(*c)))
            .collect()
    }

    /// Categories worth showing: anything that is not exactly zero.
    pub fn visible_line_items(&self) -> Vec<(BenefitCategory, f64)> {
        self.line_items()
            .into_iter()
            .filter(|(_, v)| *v != 0.0)
            .collect()
    }

    pub fn is_profitable(&self) -> bool {
        self.net_annual_profit > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering() {
        assert!(VitalityStatus::Blue < VitalityStatus::Bronze);
        assert!(VitalityStatus::Gold < VitalityStatus::Diamond);
        assert!(VitalityStatus::Unrecognized < VitalityStatus::Blue);
        let mut sorted = vec![
            VitalityStatus::Diamond,
            VitalityStatus::Unrecognized,
            VitalityStatus::Silver,
        ];
        sorted.sort();
        assert_eq!(
            sorted,
            vec![
                VitalityStatus::Unrecognized,
                VitalityStatus::Silver,
                VitalityStatus::Diamond,
            ]
        );
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(VitalityStatus::from("Gold"), VitalityStatus::Gold);
        assert_eq!(VitalityStatus::from(" diamond "), VitalityStatus::Diamond);
        assert_eq!(VitalityStatus::from("platinum"), VitalityStatus::Unrecognized);
    }

    #[test]
    fn test_unknown_status_deserializes() {
        let status: VitalityStatus = serde_json::from_str("\"platinum\"").unwrap();
        assert_eq!(status, VitalityStatus::Unrecognized);
        let status: VitalityStatus = serde_json::from_str("\"silver\"").unwrap();
        assert_eq!(status, VitalityStatus::Silver);
    }

    #[test]
    fn test_canonical_names_deserialize() {
        let status: VitalityStatus = serde_json::from_str("\"Gold\"").unwrap();
        assert_eq!(status, VitalityStatus::Gold);
        let kind: TechPurchaseType = serde_json::from_str("\"Apple\"").unwrap();
        assert_eq!(kind, TechPurchaseType::Apple);
        let kind: TechPurchaseType = serde_json::from_str("\"technogym\"").unwrap();
        assert_eq!(kind, TechPurchaseType::Technogym);
        assert_eq!(serde_json::to_string(&VitalityStatus::Diamond).unwrap(), "\"Diamond\"");
    }

    #[test]
    fn test_profile_default_is_empty() {
        let profile = MemberProfile::default();
        assert_eq!(profile.vitality_health_status, VitalityStatus::Blue);
        assert_eq!(profile.tech_purchase_type, TechPurchaseType::None);
        assert_eq!(profile.monthly_card_spend, 0.0);
        assert!(!profile.has_gym_membership);
    }

    #[test]
    fn test_partial_profile_json_fills_defaults() {
        let json = r#"{"monthly_card_spend": 95000, "vitality_money_status": "diamond"}"#;
        let profile: MemberProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.monthly_card_spend, 95_000.0);
        assert_eq!(profile.vitality_money_status, VitalityStatus::Diamond);
        assert_eq!(profile.vitality_health_status, VitalityStatus::Blue);
        assert_eq!(profile.lounge_visits_per_year, 0);
    }

    #[test]
    fn test_benefit_categories_cover_seventeen() {
        assert_eq!(BenefitCategory::ALL.len(), 17);
        assert_eq!(BenefitCategory::Tech.label(), "Tech purchase");
    }
}
