//! Static discount tables.
//!
//! Two kinds of table live here: flat status tables (one percentage per
//! status) and spend ladders, where the percentage also depends on how much
//! the member puts through the card each month. The four ladders share a
//! shape but not their values, so each one is spelled out in full.

use purple_core::VitalityStatus;

// ─── Status Tables ──────────────────────────────────────────────────────────

/// One percentage per recognised status. `Unrecognized` always reads 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRates {
    pub blue: f64,
    pub bronze: f64,
    pub silver: f64,
    pub gold: f64,
    pub diamond: f64,
}

impl StatusRates {
    pub fn rate(&self, status: VitalityStatus) -> f64 {
        match status {
            VitalityStatus::Blue => self.blue,
            VitalityStatus::Bronze => self.bronze,
            VitalityStatus::Silver => self.silver,
            VitalityStatus::Gold => self.gold,
            VitalityStatus::Diamond => self.diamond,
            VitalityStatus::Unrecognized => 0.0,
        }
    }
}

/// Vitality Health discount, applied across every health-linked benefit.
pub const HEALTH_DISCOUNT: StatusRates = StatusRates {
    blue: 0.0,
    bronze: 10.0,
    silver: 15.0,
    gold: 20.0,
    diamond: 25.0,
};

/// Vitality Money discount on HealthyFood.
pub const MONEY_FOOD_DISCOUNT: StatusRates = StatusRates {
    blue: 0.0,
    bronze: 10.0,
    silver: 20.0,
    gold: 35.0,
    diamond: 50.0,
};

/// Vitality Money discount on HealthyCare.
pub const MONEY_CARE_DISCOUNT: StatusRates = StatusRates {
    blue: 0.0,
    bronze: 5.0,
    silver: 10.0,
    gold: 20.0,
    diamond: 25.0,
};

/// Which Vitality Money table a partner benefit reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyCategory {
    Food,
    Care,
}

pub fn health_discount(status: VitalityStatus) -> f64 {
    HEALTH_DISCOUNT.rate(status)
}

pub fn money_discount(status: VitalityStatus, category: MoneyCategory) -> f64 {
    match category {
        MoneyCategory::Food => MONEY_FOOD_DISCOUNT.rate(status),
        MoneyCategory::Care => MONEY_CARE_DISCOUNT.rate(status),
    }
}

// ─── Spend Ladders ──────────────────────────────────────────────────────────

/// Members at `status` whose monthly card spend reaches `min_card_spend`
/// earn `pct`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub min_card_spend: f64,
    pub status: VitalityStatus,
    pub pct: f64,
}

const fn rung(min_card_spend: f64, status: VitalityStatus, pct: f64) -> Rung {
    Rung {
        min_card_spend,
        status,
        pct,
    }
}

/// Base rate of a spend ladder. Only Silver and above are named; every
/// other status, unrecognised ones included, earns `other`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRates {
    pub diamond: f64,
    pub gold: f64,
    pub silver: f64,
    pub other: f64,
}

impl BaseRates {
    pub fn rate(&self, status: VitalityStatus) -> f64 {
        match status {
            VitalityStatus::Diamond => self.diamond,
            VitalityStatus::Gold => self.gold,
            VitalityStatus::Silver => self.silver,
            _ => self.other,
        }
    }
}

/// What a member gets when no rung matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LadderBase {
    /// Flat rate keyed on status alone.
    PerStatus(BaseRates),
    /// Flat rate for everyone whose card spend reaches `min_card_spend`,
    /// nothing below it.
    CardSpendFloor { min_card_spend: f64, pct: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendLadder {
    pub name: &'static str,
    /// Checked in order; the first matching rung wins.
    pub rungs: &'static [Rung],
    pub base: LadderBase,
}

impl SpendLadder {
    pub fn discount(&self, status: VitalityStatus, monthly_card_spend: f64) -> f64 {
        self.rungs
            .iter()
            .find(|r| r.status == status && monthly_card_spend >= r.min_card_spend)
            .map(|r| r.pct)
            .unwrap_or_else(|| match self.base {
                LadderBase::PerStatus(rates) => rates.rate(status),
                LadderBase::CardSpendFloor { min_card_spend, pct } => {
                    if monthly_card_spend >= min_card_spend {
                        pct
                    } else {
                        0.0
                    }
                }
            })
    }
}

use VitalityStatus::{Diamond, Gold, Silver};

pub const FUEL: SpendLadder = SpendLadder {
    name: "fuel",
    rungs: &[
        rung(39_000.0, Diamond, 20.0),
        rung(39_000.0, Gold, 15.0),
        rung(39_000.0, Silver, 12.0),
        rung(28_000.0, Diamond, 15.0),
        rung(28_000.0, Gold, 11.0),
    ],
    base: LadderBase::PerStatus(BaseRates {
        diamond: 11.0,
        gold: 8.0,
        silver: 6.5,
        other: 4.0,
    }),
};

pub const HOME_PARTNER: SpendLadder = SpendLadder {
    name: "home_partner",
    rungs: &[
        rung(56_000.0, Diamond, 15.0),
        rung(56_000.0, Gold, 11.0),
        rung(45_000.0, Diamond, 11.0),
        rung(45_000.0, Gold, 7.5),
    ],
    base: LadderBase::CardSpendFloor {
        min_card_spend: 3_000.0,
        pct: 5.0,
    },
};

pub const LOCAL_FLIGHT: SpendLadder = SpendLadder {
    name: "local_flight",
    rungs: &[
        rung(45_000.0, Diamond, 50.0),
        rung(45_000.0, Gold, 35.0),
        rung(39_000.0, Diamond, 45.0),
        rung(39_000.0, Gold, 35.0),
        rung(28_000.0, Diamond, 35.0),
        rung(28_000.0, Gold, 26.0),
    ],
    base: LadderBase::PerStatus(BaseRates {
        diamond: 27.5,
        gold: 20.0,
        silver: 17.5,
        other: 7.0,
    }),
};

pub const INTERNATIONAL_FLIGHT: SpendLadder = SpendLadder {
    name: "international_flight",
    rungs: &[
        rung(90_000.0, Diamond, 50.0),
        rung(90_000.0, Gold, 30.0),
        rung(79_000.0, Diamond, 45.0),
        rung(79_000.0, Gold, 30.0),
        rung(56_000.0, Diamond, 27.5),
        rung(56_000.0, Gold, 20.0),
    ],
    base: LadderBase::PerStatus(BaseRates {
        diamond: 12.5,
        gold: 9.0,
        silver: 7.5,
        other: 5.0,
    }),
};
