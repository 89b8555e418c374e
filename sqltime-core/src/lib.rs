mod calendar;
mod calendar_cache;
mod error;
mod query_parameter;
mod sql_date;
mod time_zone;
mod util;

pub use ::anyhow::Context;
pub use calendar::*;
pub use calendar_cache::*;
pub use error::*;
pub use query_parameter::*;
pub use sql_date::*;
pub use time_zone::*;
pub use util::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
