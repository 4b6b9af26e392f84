// libs/scheduling-cell/src/models.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_utils::time::day_of_week_index;

/// Granularity between successive slot starts when none is configured.
pub const DEFAULT_STEP_MINUTES: i32 = 15;

// ==============================================================================
// CORE SCHEDULING MODELS
// ==============================================================================

/// A bookable unit of time offered to a client.
///
/// `display_label` is the "HH:MM" rendering of `start_time` in the time zone
/// the slot was generated for. It is derived data and can always be recomputed
/// from `start_time` and the zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub is_available: bool,
    pub display_label: String,
}

/// A recurring closed window within the working day (e.g. lunch break).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BreakWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// An interval already occupied by a confirmed booking.
///
/// Entries may be adjacent to or overlap each other; slot generation checks
/// each candidate against every entry and assumes no disjointness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Input configuration for one slot-generation call.
///
/// `open_hour` and `close_hour` define the working window
/// [open_hour:00, close_hour:00) as wall-clock times on `date` in `timezone`.
/// `buffer_minutes` pads each existing booking on both sides before overlap
/// testing, modeling the setup/cleanup time staff need between appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConstraints {
    pub date: NaiveDate,
    pub open_hour: u32,
    pub close_hour: u32,
    pub step_minutes: i32,
    pub break_windows: Vec<BreakWindow>,
    pub existing_bookings: Vec<ExistingBooking>,
    pub buffer_minutes: i32,
    pub timezone: Tz,
}

impl SchedulingConstraints {
    pub fn new(date: NaiveDate, open_hour: u32, close_hour: u32, timezone: Tz) -> Self {
        Self {
            date,
            open_hour,
            close_hour,
            step_minutes: DEFAULT_STEP_MINUTES,
            break_windows: Vec::new(),
            existing_bookings: Vec::new(),
            buffer_minutes: 0,
            timezone,
        }
    }
}

// ==============================================================================
// VENUE SCHEDULE MODELS
// ==============================================================================

/// Operating hours for a single day of the week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

/// A venue's recurring weekly hours plus date-specific closures.
///
/// `hours` is indexed by day of week, 0 = Sunday through 6 = Saturday; `None`
/// marks a day the venue does not open at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub hours: [Option<DayHours>; 7],
    pub closed_dates: Vec<NaiveDate>,
}

impl WeeklySchedule {
    /// Operating hours for a calendar date, or `None` when the venue is closed
    /// that day (weekday closure or a date-specific closure).
    pub fn hours_for(&self, date: NaiveDate) -> Option<DayHours> {
        if self.closed_dates.contains(&date) {
            return None;
        }
        self.hours[day_of_week_index(date)]
    }
}

/// Standing scheduling configuration for a venue, combined with a date and the
/// day's bookings to produce one generation call's constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSchedulingConfig {
    pub weekly_hours: WeeklySchedule,
    pub break_windows: Vec<BreakWindow>,
    pub step_minutes: i32,
    pub buffer_minutes: i32,
    pub timezone: Tz,
}

impl VenueSchedulingConfig {
    pub fn new(timezone: Tz) -> Self {
        Self {
            weekly_hours: WeeklySchedule::default(),
            break_windows: Vec::new(),
            step_minutes: DEFAULT_STEP_MINUTES,
            buffer_minutes: 0,
            timezone,
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum SchedulingError {
    #[error("Invalid scheduling constraints: {0}")]
    InvalidConstraints(String),

    #[error("Time slot is no longer available")]
    SlotUnavailable,

    #[error("Validation error: {0}")]
    ValidationError(String),
}
