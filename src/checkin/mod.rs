//! Lecture check-in core: admission control and the lazy daily counter
//!
//! Both pieces are pure. Loading and persisting live in
//! [`crate::services::checkin::CheckinService`].

pub mod counter;
pub mod error;
pub mod gate;

pub use counter::CounterState;
pub use error::CheckinError;
pub use gate::{Admission, AdmissionGate, DEFAULT_ADMISSION_RADIUS_METERS};
