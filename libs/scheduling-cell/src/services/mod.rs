pub mod availability;
pub mod schedule;
pub mod validation;

pub use availability::AvailabilityService;
pub use schedule::ScheduleService;
pub use validation::SlotValidationService;
