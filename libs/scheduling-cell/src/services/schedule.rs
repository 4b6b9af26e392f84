// libs/scheduling-cell/src/services/schedule.rs
use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{
    ExistingBooking, SchedulingConstraints, SchedulingError, TimeSlot, VenueSchedulingConfig,
};
use crate::services::availability::AvailabilityService;

/// Applies a venue's standing weekly schedule to individual dates.
///
/// Weekday and date closures are decided here so that slot generation itself
/// only ever sees a concrete open/close window.
pub struct ScheduleService {
    availability: AvailabilityService,
}

impl ScheduleService {
    pub fn new() -> Self {
        Self {
            availability: AvailabilityService::new(),
        }
    }

    /// Build the generation constraints for a date, or `None` when the venue
    /// is closed that day.
    pub fn constraints_for_date(
        &self,
        config: &VenueSchedulingConfig,
        date: NaiveDate,
        existing_bookings: &[ExistingBooking],
    ) -> Option<SchedulingConstraints> {
        let day_hours = config.weekly_hours.hours_for(date)?;

        Some(SchedulingConstraints {
            date,
            open_hour: day_hours.open_hour,
            close_hour: day_hours.close_hour,
            step_minutes: config.step_minutes,
            break_windows: config.break_windows.clone(),
            existing_bookings: existing_bookings.to_vec(),
            buffer_minutes: config.buffer_minutes,
            timezone: config.timezone,
        })
    }

    /// Bookable slots for a date under the venue's standing schedule.
    /// Closed days yield an empty list.
    pub fn slots_for_date(
        &self,
        config: &VenueSchedulingConfig,
        date: NaiveDate,
        existing_bookings: &[ExistingBooking],
    ) -> Result<Vec<TimeSlot>, SchedulingError> {
        match self.constraints_for_date(config, date, existing_bookings) {
            Some(constraints) => self.availability.generate_slots(&constraints),
            None => {
                debug!("Venue closed on {}, no slots generated", date);
                Ok(Vec::new())
            }
        }
    }

    /// First date on or after `from` the venue opens, searching at most
    /// `max_search_days` days ahead.
    pub fn next_open_date(
        &self,
        config: &VenueSchedulingConfig,
        from: NaiveDate,
        max_search_days: i32,
    ) -> Option<NaiveDate> {
        (0..max_search_days.max(0) as i64)
            .map(|offset| from + Duration::days(offset))
            .find(|date| config.weekly_hours.hours_for(*date).is_some())
    }
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new()
    }
}
