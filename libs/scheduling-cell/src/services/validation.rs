// libs/scheduling-cell/src/services/validation.rs
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::{SchedulingError, TimeSlot};

/// Re-checks a slot selection at submission time.
///
/// The slot list a client is looking at can go stale between display and
/// submission; this runs once more against the current clock before the
/// booking is handed to storage. `now` is an explicit parameter so callers
/// inject their own clock.
pub struct SlotValidationService;

impl SlotValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `selected_slot` may still be booked at `now`.
    ///
    /// Accepts any `TimeSlot`-shaped value, not only generator output, so the
    /// caller can revalidate against server-confirmed slot state.
    pub fn validate_selection(
        &self,
        selected_slot: Option<&TimeSlot>,
        now: DateTime<Utc>,
    ) -> Result<(), SchedulingError> {
        let slot = selected_slot.ok_or_else(|| {
            SchedulingError::ValidationError("No time slot selected".to_string())
        })?;

        debug!("Validating slot selection at {}", slot.start_time);

        if !slot.is_available {
            warn!("Rejected slot at {}: no longer available", slot.start_time);
            return Err(SchedulingError::SlotUnavailable);
        }

        if slot.start_time < now {
            warn!("Rejected slot at {}: already in the past", slot.start_time);
            return Err(SchedulingError::ValidationError(
                "Selected time slot has already passed".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SlotValidationService {
    fn default() -> Self {
        Self::new()
    }
}
