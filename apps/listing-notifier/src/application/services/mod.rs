//! Application services - the poll-until-listed loop and notification
//! dispatch.

pub mod dispatch;
pub mod poller;

pub use dispatch::{AlertLoop, DeliveryOutcome, collect_outcomes, dispatch_one_shot};
pub use poller::{ListingPoller, WatchOutcome};
