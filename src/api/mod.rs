mod client;
mod time;
mod types;

pub use client::{FeedClient, FeedError};
pub use time::{format_clock, parse_timestamp};
pub use types::{ShowRecord, WeekInfo};
