use serde::{Deserialize, Serialize};

/// Spending-ratio category shown as a coin icon on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpendingTier {
    Excellent,
    VeryGood,
    Good,
    Bad,
}

impl SpendingTier {
    /// CSS modifier / icon name for the tier
    pub fn css_class(&self) -> &'static str {
        match self {
            SpendingTier::Excellent => "excellent",
            SpendingTier::VeryGood => "very-good",
            SpendingTier::Good => "good",
            SpendingTier::Bad => "bad",
        }
    }

    /// Image path of the coin asset for the tier
    pub fn icon_path(&self) -> &'static str {
        match self {
            SpendingTier::Excellent => "/assets/images/ExcellentCoin.svg",
            SpendingTier::VeryGood => "/assets/images/VeryGoodCoin.svg",
            SpendingTier::Good => "/assets/images/GoodCoin.svg",
            SpendingTier::Bad => "/assets/images/BadCoin.svg",
        }
    }
}

/// Upper bounds (inclusive, in percent of the daily target) for the first
/// three tiers. Anything above `good` is [`SpendingTier::Bad`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub excellent: f64,
    pub very_good: f64,
    pub good: f64,
}

impl TierThresholds {
    /// Bands used when annotating calendar days.
    pub const CALENDAR: TierThresholds = TierThresholds {
        excellent: 26.0,
        very_good: 51.0,
        good: 76.0,
    };

    /// Bands printed in the legend under the calendar. These disagree with
    /// [`TierThresholds::CALENDAR`] by one percent at every boundary; which
    /// one is correct is a product decision, so both are kept.
    pub const LEGEND: TierThresholds = TierThresholds {
        excellent: 25.0,
        very_good: 50.0,
        good: 75.0,
    };

    /// Tier for a day's spending, or `None` when there is no positive target.
    pub fn classify(&self, total_amount: f64, target_amount: f64) -> Option<SpendingTier> {
        if !(target_amount > 0.0) {
            return None;
        }

        let percentage = total_amount / target_amount * 100.0;
        let tier = if percentage <= self.excellent {
            SpendingTier::Excellent
        } else if percentage <= self.very_good {
            SpendingTier::VeryGood
        } else if percentage <= self.good {
            SpendingTier::Good
        } else {
            SpendingTier::Bad
        };
        Some(tier)
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::CALENDAR
    }
}

/// Tier for a day's spending using the calendar bands.
pub fn classify_spending(total_amount: f64, target_amount: f64) -> Option<SpendingTier> {
    TierThresholds::CALENDAR.classify(total_amount, target_amount)
}

/// One entry of the legend rendered under the calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub tier: SpendingTier,
    pub label: &'static str,
}

/// Legend entries as the product currently ships them.
///
/// The lowest band is drawn with the `Bad` coin even though the calendar
/// gives that band the `Excellent` coin. Kept as-is until product decides.
pub const SPENDING_LEGEND: [LegendEntry; 4] = [
    LegendEntry { tier: SpendingTier::Bad, label: "0~25% 소비절약" },
    LegendEntry { tier: SpendingTier::Good, label: "26~50% 소비절약" },
    LegendEntry { tier: SpendingTier::VeryGood, label: "51~75% 소비절약" },
    LegendEntry { tier: SpendingTier::Excellent, label: "76~100% 소비절약" },
];
