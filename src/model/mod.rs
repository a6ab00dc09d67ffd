//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors; the
//! functions in [`date`] are total over their inputs.

pub mod date;
pub mod direction;
pub mod error;
pub mod key_action;
pub mod notification;
pub mod view;

// Re-export for convenience
pub use date::{DateRange, Granularity};
pub use direction::{Direction, SlideDirection};
pub use error::CalendarError;
pub use key_action::KeyAction;
pub use notification::Notification;
pub use view::{Step, View, Views};
