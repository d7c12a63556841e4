//! Period aggregation of reconciled records.
//!
//! Sums per-row results into period totals: one rendered/shortfall pair
//! per category plus the combined Morning+Afternoon "official day" pair.
//! Summation is plain duration addition with second-to-minute-to-hour
//! carrying; totals past 24 hours keep growing in the hours field rather
//! than rolling into days. The fold is commutative, so record order never
//! affects the outcome.

use crate::libs::formatter::format_duration;
use crate::libs::reconcile::RecordSummary;
use crate::libs::schedule::Category;
use chrono::Duration;

/// A rendered/shortfall sum for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketTotals {
    pub rendered: Duration,
    pub shortfall: Duration,
}

impl BucketTotals {
    fn zero() -> Self {
        Self {
            rendered: Duration::zero(),
            shortfall: Duration::zero(),
        }
    }
}

/// Aggregated totals for a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotals {
    categories: [BucketTotals; Category::ALL.len()],
    /// Combined Morning+Afternoon rendered time and tardiness.
    pub official_day: BucketTotals,
}

impl PeriodTotals {
    pub fn category(&self, category: Category) -> &BucketTotals {
        &self.categories[category.index()]
    }

    /// Formatted rendered total for a category.
    pub fn rendered(&self, category: Category) -> String {
        format_duration(&self.category(category).rendered)
    }

    /// Formatted shortfall total for a category.
    pub fn shortfall(&self, category: Category) -> String {
        format_duration(&self.category(category).shortfall)
    }
}

/// Sums a sequence of per-row summaries into period totals.
pub fn aggregate(summaries: &[RecordSummary]) -> PeriodTotals {
    let mut categories = [BucketTotals::zero(); Category::ALL.len()];
    let mut official_day = BucketTotals::zero();

    for summary in summaries {
        for category in Category::ALL {
            let result = summary.result(category);
            let bucket = &mut categories[category.index()];
            bucket.rendered = bucket.rendered + result.rendered;
            bucket.shortfall = bucket.shortfall + result.shortfall;
        }
        let (rendered, tardiness) = summary.official_day();
        official_day.rendered = official_day.rendered + rendered;
        official_day.shortfall = official_day.shortfall + tardiness;
    }

    PeriodTotals { categories, official_day }
}

/// Chainable aggregation over summary collections.
pub trait Aggregate {
    fn totals(&self) -> PeriodTotals;
}

impl Aggregate for Vec<RecordSummary> {
    fn totals(&self) -> PeriodTotals {
        aggregate(self)
    }
}
