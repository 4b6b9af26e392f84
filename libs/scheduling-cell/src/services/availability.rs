// libs/scheduling-cell/src/services/availability.rs
use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::debug;

use shared_utils::time::{intervals_overlap, local_datetime_to_utc, pad_interval};

use crate::models::{SchedulingConstraints, SchedulingError, TimeSlot};

/// Computes the bookable time slots for a single day.
///
/// Generation is deterministic and side-effect free: the same constraints
/// always produce the same ordered slot list, and calls from concurrent tasks
/// never interfere.
pub struct AvailabilityService;

impl AvailabilityService {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the ordered list of bookable slots for the constraint's date.
    ///
    /// Candidates start at `open_hour` and advance in `step_minutes`
    /// increments while their start lies before `close_hour`. A candidate that
    /// overlaps a break window or a buffer-padded existing booking is dropped
    /// from the output entirely; everything emitted is bookable.
    pub fn generate_slots(
        &self,
        constraints: &SchedulingConstraints,
    ) -> Result<Vec<TimeSlot>, SchedulingError> {
        self.validate_constraints(constraints)?;

        debug!(
            "Generating slots for {} between {}:00 and {}:00 ({})",
            constraints.date, constraints.open_hour, constraints.close_hour, constraints.timezone
        );

        // A zero-length or inverted window is an empty day, not an error.
        if constraints.close_hour <= constraints.open_hour {
            return Ok(Vec::new());
        }

        let day_open = self.resolve_hour(constraints, constraints.open_hour)?;
        let day_close = self.resolve_hour(constraints, constraints.close_hour)?;
        let blocked = self.resolve_blocked_intervals(constraints)?;

        let step = Duration::minutes(constraints.step_minutes as i64);
        let mut slots = Vec::new();
        let mut current_time = day_open;

        // Slot starts are capped by closing time, not slot ends: a final
        // partial step still yields a slot that may run past close.
        while current_time < day_close {
            let slot_end = current_time + step;

            let has_conflict = blocked
                .iter()
                .any(|(start, end)| intervals_overlap(current_time, slot_end, *start, *end));

            if !has_conflict {
                slots.push(TimeSlot {
                    start_time: current_time,
                    is_available: true,
                    display_label: current_time
                        .with_timezone(&constraints.timezone)
                        .format("%H:%M")
                        .to_string(),
                });
            }

            current_time += step;
        }

        debug!("Generated {} bookable slots for {}", slots.len(), constraints.date);
        Ok(slots)
    }

    fn validate_constraints(&self, constraints: &SchedulingConstraints) -> Result<(), SchedulingError> {
        if constraints.step_minutes <= 0 {
            return Err(SchedulingError::InvalidConstraints(
                "step_minutes must be positive".to_string(),
            ));
        }

        if constraints.open_hour > 23 || constraints.close_hour > 23 {
            return Err(SchedulingError::InvalidConstraints(
                "open_hour and close_hour must be between 0 and 23".to_string(),
            ));
        }

        if constraints.buffer_minutes < 0 {
            return Err(SchedulingError::InvalidConstraints(
                "buffer_minutes cannot be negative".to_string(),
            ));
        }

        for window in &constraints.break_windows {
            if window.start_time >= window.end_time {
                return Err(SchedulingError::InvalidConstraints(format!(
                    "break window start {} must be before end {}",
                    window.start_time, window.end_time
                )));
            }
        }

        Ok(())
    }

    /// Resolve `hour`:00 on the constraint's date to an absolute instant.
    fn resolve_hour(
        &self,
        constraints: &SchedulingConstraints,
        hour: u32,
    ) -> Result<DateTime<Utc>, SchedulingError> {
        let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        local_datetime_to_utc(constraints.date, time, constraints.timezone).ok_or_else(|| {
            SchedulingError::InvalidConstraints(format!(
                "{}:00 does not exist on {} in {}",
                hour, constraints.date, constraints.timezone
            ))
        })
    }

    /// Collect every interval that blocks a candidate slot: break windows
    /// anchored to the date, and existing bookings padded by the buffer.
    fn resolve_blocked_intervals(
        &self,
        constraints: &SchedulingConstraints,
    ) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>, SchedulingError> {
        let mut blocked = Vec::with_capacity(
            constraints.break_windows.len() + constraints.existing_bookings.len(),
        );

        for window in &constraints.break_windows {
            let start = local_datetime_to_utc(constraints.date, window.start_time, constraints.timezone);
            let end = local_datetime_to_utc(constraints.date, window.end_time, constraints.timezone);
            match (start, end) {
                (Some(start), Some(end)) => blocked.push((start, end)),
                _ => {
                    return Err(SchedulingError::InvalidConstraints(format!(
                        "break window {} - {} does not exist on {} in {}",
                        window.start_time, window.end_time, constraints.date, constraints.timezone
                    )))
                }
            }
        }

        for booking in &constraints.existing_bookings {
            blocked.push(pad_interval(
                booking.start_time,
                booking.end_time,
                constraints.buffer_minutes,
            ));
        }

        Ok(blocked)
    }
}

impl Default for AvailabilityService {
    fn default() -> Self {
        Self::new()
    }
}
