//! Monthly and fiscal-quarter usage reports.
//!
//! RequestEvent
//! aggregate_monthly  -> MonthlyBucket
//! resample_quarters  -> FiscalQuarterBucket
//! yearly_totals      -> FiscalYearSummary

mod fiscal;
mod generate;
mod monthly;
#[cfg(test)]
mod tests;
mod types;

pub use fiscal::*;
pub use generate::*;
pub use monthly::*;
pub use types::*;
