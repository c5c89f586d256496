mod fixture;
pub mod tracing;

pub use fixture::{CMIP6_PATH, E3SM_PATH, LogTree, access_line};
pub use tracing::{CapturedEvent, capture_events};
