//! Navigation state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! [`binding`] layers controlled/uncontrolled ownership on top.

pub mod binding;
pub mod navigation;
pub mod slide;

// Re-export for convenience
pub use binding::{BindingMode, CalendarBinding, Ownership};
pub use navigation::{CalendarConfig, Event, NavigationController, NavigationState, TransitionResult};
pub use slide::slide_direction;
