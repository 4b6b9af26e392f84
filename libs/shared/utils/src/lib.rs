pub mod time;

pub use time::{day_of_week_index, intervals_overlap, local_datetime_to_utc, pad_interval};
