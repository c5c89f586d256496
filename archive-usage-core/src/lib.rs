pub mod cli;
pub mod conf;
pub mod error;
pub mod facet;
pub mod logging;
pub mod record;
pub mod report;
pub mod stream;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::ReportError;
