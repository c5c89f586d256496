use crate::facet::FacetName;
use crate::record::RequestEvent;
use crate::report::{MonthlyBucket, Usage, fiscal_period, gigabytes};
use std::collections::BTreeMap;

type MonthKey = (i32, u32, Option<&'static str>);

/// Groups events by calendar month, and by the value of `facet` when one is
/// given.
///
/// Request counts and byte totals share one key set, so a month whose
/// requests all failed still appears with zero bytes. Events without a value
/// for the requested facet form their own group rather than being dropped.
/// Output is sorted by year, month, then facet value (unclassified first).
pub fn aggregate_monthly<'a, I>(events: I, facet: Option<FacetName>) -> Vec<MonthlyBucket>
where
    I: IntoIterator<Item = &'a RequestEvent>,
{
    let mut months: BTreeMap<MonthKey, Usage> = BTreeMap::new();

    for event in events {
        let facet_value = facet.and_then(|name| event.facets.get(name));
        months
            .entry((event.calendar_year(), event.calendar_month(), facet_value))
            .or_default()
            .record(event);
    }

    months
        .into_iter()
        .map(|((year, month, facet_value), usage)| MonthlyBucket {
            calendar_year: year,
            calendar_month: month,
            fiscal: fiscal_period(year, month),
            facet_value,
            requests: usage.requests,
            bytes: usage.bytes,
            gb: gigabytes(usage.bytes),
        })
        .collect()
}

impl MonthlyBucket {
    pub fn usage(&self) -> Usage {
        Usage {
            requests: self.requests,
            bytes: self.bytes,
        }
    }
}
