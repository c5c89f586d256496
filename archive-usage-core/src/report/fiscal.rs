use crate::report::{
    FiscalPeriod, FiscalQuarter, FiscalQuarterBucket, FiscalYear, FiscalYearSummary,
    MonthlyBucket, Usage, gigabytes,
};
use chrono::{Months, NaiveDate};
use std::collections::BTreeMap;

/// First calendar month of the fiscal year (July).
pub const FISCAL_YEAR_START_MONTH: u32 = 7;

/// Maps a calendar month onto the July-to-June fiscal calendar.
///
/// July through December belong to the fiscal year named after the next
/// calendar year; January through June to the one named after the current
/// year. So June 2020 is FY2020 Q4 and July 2020 is FY2021 Q1.
pub fn fiscal_period(calendar_year: i32, calendar_month: u32) -> FiscalPeriod {
    let fiscal_year = if calendar_month >= FISCAL_YEAR_START_MONTH {
        calendar_year + 1
    } else {
        calendar_year
    };

    let quarter = match calendar_month {
        7..=9 => FiscalQuarter::Q1,
        10..=12 => FiscalQuarter::Q2,
        1..=3 => FiscalQuarter::Q3,
        _ => FiscalQuarter::Q4,
    };

    FiscalPeriod {
        fiscal_year: FiscalYear(fiscal_year),
        fiscal_quarter: quarter,
        fiscal_month: (calendar_month + 5) % 12 + 1,
    }
}

/// First day of the quarter's first month and last day of its last month.
///
/// `year` must come from a four-digit calendar year (FY1 to FY10000), which
/// `parse_timestamp` guarantees for every parsed event.
pub fn quarter_bounds(year: FiscalYear, quarter: FiscalQuarter) -> (NaiveDate, NaiveDate) {
    let (calendar_year, first_month) = match quarter {
        FiscalQuarter::Q1 => (year.0 - 1, 7),
        FiscalQuarter::Q2 => (year.0 - 1, 10),
        FiscalQuarter::Q3 => (year.0, 1),
        FiscalQuarter::Q4 => (year.0, 4),
    };

    let start = NaiveDate::from_ymd_opt(calendar_year, first_month, 1)
        .expect("first day of a quarter month is a valid date");
    let end = start
        .checked_add_months(Months::new(3))
        .and_then(|next| next.pred_opt())
        .expect("last day of a quarter is a valid date");

    (start, end)
}

/// Sums monthly buckets into fiscal quarters.
///
/// Facet-grouped input is resampled per facet value. Quarters without any
/// contributing month are omitted, not zero-filled. Output is sorted by
/// fiscal year, quarter, then facet value.
pub fn resample_quarters(monthly: &[MonthlyBucket]) -> Vec<FiscalQuarterBucket> {
    let mut quarters: BTreeMap<(FiscalYear, FiscalQuarter, Option<&'static str>), Usage> =
        BTreeMap::new();

    for bucket in monthly {
        let period = bucket.fiscal;
        quarters
            .entry((period.fiscal_year, period.fiscal_quarter, bucket.facet_value))
            .or_default()
            .add(bucket.usage());
    }

    quarters
        .into_iter()
        .map(|((year, quarter, facet_value), usage)| {
            let (start_date, end_date) = quarter_bounds(year, quarter);
            FiscalQuarterBucket {
                fiscal_year: year,
                fiscal_quarter: quarter,
                facet_value,
                requests: usage.requests,
                bytes: usage.bytes,
                gb: gigabytes(usage.bytes),
                start_date,
                end_date,
            }
        })
        .collect()
}

/// Folds quarters into whole fiscal years, per facet value.
pub fn yearly_totals(quarterly: &[FiscalQuarterBucket]) -> Vec<FiscalYearSummary> {
    let mut years: BTreeMap<(FiscalYear, Option<&'static str>), Usage> = BTreeMap::new();

    for bucket in quarterly {
        years
            .entry((bucket.fiscal_year, bucket.facet_value))
            .or_default()
            .add(Usage {
                requests: bucket.requests,
                bytes: bucket.bytes,
            });
    }

    years
        .into_iter()
        .map(|((year, facet_value), usage)| FiscalYearSummary {
            fiscal_year: year,
            facet_value,
            requests: usage.requests,
            bytes: usage.bytes,
            gb: gigabytes(usage.bytes),
        })
        .collect()
}
