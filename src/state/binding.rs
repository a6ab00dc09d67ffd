//! Controlled/uncontrolled ownership of navigation state.
//!
//! The controller never knows who owns a field. [`CalendarBinding`] runs a
//! transition, keeps the fields it owns (uncontrolled) and leaves the fields
//! the host owns (controlled) untouched until the host echoes a value back
//! through one of the `set_*` methods. Notifications are returned either way.

use crate::model::{CalendarError, Notification, View};
use crate::state::{
    slide_direction, CalendarConfig, Event, NavigationController, NavigationState,
};
use chrono::NaiveDate;
use tracing::debug;

/// Who owns a state field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ownership {
    /// The binding applies transition results itself.
    #[default]
    Uncontrolled,
    /// The host applies changes by calling back into the binding.
    Controlled,
}

impl Ownership {
    fn owns(self) -> bool {
        self == Ownership::Uncontrolled
    }
}

/// Per-field ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingMode {
    /// Committed value.
    pub value: Ownership,
    /// Focused date.
    pub current_date: Ownership,
    /// View level.
    pub view: Ownership,
}

impl BindingMode {
    /// Every field owned by the host.
    pub fn controlled() -> Self {
        Self {
            value: Ownership::Controlled,
            current_date: Ownership::Controlled,
            view: Ownership::Controlled,
        }
    }
}

/// A controller plus the state it is driving.
#[derive(Debug, Clone)]
pub struct CalendarBinding {
    controller: NavigationController,
    state: NavigationState,
    mode: BindingMode,
}

impl CalendarBinding {
    /// Build a binding from a validated configuration.
    pub fn new(
        config: &CalendarConfig,
        today: NaiveDate,
        mode: BindingMode,
    ) -> Result<Self, CalendarError> {
        let (controller, state) = NavigationController::initialize(config, today)?;
        Ok(Self {
            controller,
            state,
            mode,
        })
    }

    /// The wrapped controller.
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// State as currently applied.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Per-field ownership.
    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    /// Run one event and keep the fields this binding owns.
    pub fn dispatch(&mut self, event: Event) -> Vec<Notification> {
        let result = self.controller.reduce(&self.state, event);
        let old = self.state;
        let next = result.state;

        let mut applied = old;
        if self.mode.value.owns() {
            applied.value = next.value;
        }
        if self.mode.current_date.owns() {
            applied.current_date = next.current_date;
        }
        if self.mode.view.owns() {
            applied.view = next.view;
        }
        applied.slide = slide_direction(self.controller.views(), &old, &applied);

        if applied != next {
            debug!(?event, "Transition partially applied; host owns the rest");
        }
        self.state = applied;
        result.notifications
    }

    /// Host echo of the committed value.
    ///
    /// Goes through [`NavigationController::reconcile`], so an owned focused
    /// date follows a changed value.
    pub fn set_value(&mut self, value: Option<NaiveDate>) -> Vec<Notification> {
        let result = self.controller.reconcile(&self.state, value);
        let old = self.state;
        let mut applied = old;
        applied.value = value;
        if self.mode.current_date.owns() {
            applied.current_date = result.state.current_date;
        }
        applied.slide = slide_direction(self.controller.views(), &old, &applied);
        self.state = applied;
        result.notifications
    }

    /// Host echo of the focused date. Clamped into range.
    pub fn set_current_date(&mut self, date: NaiveDate) {
        let old = self.state;
        self.state.current_date = self.controller.range().clamp(date);
        self.state.slide = slide_direction(self.controller.views(), &old, &self.state);
    }

    /// Host echo of the view.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnconfiguredView`] when `view` is not one of
    /// the configured views; the state is left unchanged.
    pub fn set_view(&mut self, view: View) -> Result<(), CalendarError> {
        if !self.controller.views().contains(view) {
            return Err(CalendarError::UnconfiguredView(view));
        }
        let old = self.state;
        self.state.view = view;
        self.state.slide = slide_direction(self.controller.views(), &old, &self.state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::model::SlideDirection;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
    }

    fn binding(view: View, date: NaiveDate, mode: BindingMode) -> CalendarBinding {
        let config = CalendarConfig {
            initial_view: Some(view),
            initial_date: Some(date),
            ..CalendarConfig::default()
        };
        CalendarBinding::new(&config, d(2024, 6, 15), mode).expect("valid config")
    }

    #[test]
    fn uncontrolled_binding_applies_every_field() {
        let mut b = binding(View::Month, d(2024, 6, 15), BindingMode::default());

        let notifications = b.dispatch(Event::CellActivate(d(2024, 6, 20)));

        assert_eq!(b.state().value, Some(d(2024, 6, 20)));
        assert_eq!(b.state().current_date, d(2024, 6, 20));
        assert_eq!(
            notifications.last(),
            Some(&Notification::Change(d(2024, 6, 20)))
        );
    }

    #[test]
    fn controlled_value_waits_for_host_echo() {
        let mode = BindingMode {
            value: Ownership::Controlled,
            ..BindingMode::default()
        };
        let mut b = binding(View::Month, d(2024, 6, 15), mode);

        let notifications = b.dispatch(Event::Key {
            key: Key::Enter,
            ctrl: false,
        });

        assert_eq!(
            notifications,
            vec![Notification::Change(d(2024, 6, 15))],
            "Notification is emitted even though the value is host-owned"
        );
        assert_eq!(b.state().value, None, "Value must not change before echo");

        b.set_value(Some(d(2024, 6, 15)));
        assert_eq!(b.state().value, Some(d(2024, 6, 15)));
    }

    #[test]
    fn controlled_view_stays_put_on_drill() {
        let mode = BindingMode {
            view: Ownership::Controlled,
            ..BindingMode::default()
        };
        let mut b = binding(View::Month, d(2024, 6, 15), mode);

        let notifications = b.dispatch(Event::DrillUp);

        assert!(notifications.contains(&Notification::ViewChange(View::Year)));
        assert_eq!(b.state().view, View::Month);

        b.set_view(View::Year).expect("configured view");
        assert_eq!(b.state().view, View::Year);
        assert_eq!(b.state().slide, SlideDirection::Bottom);
    }

    #[test]
    fn set_view_rejects_unconfigured_view() {
        let config = CalendarConfig {
            views: vec![View::Month, View::Year],
            ..CalendarConfig::default()
        };
        let mut b = CalendarBinding::new(&config, d(2024, 6, 15), BindingMode::controlled())
            .expect("valid config");

        let result = b.set_view(View::Century);

        assert_eq!(result, Err(CalendarError::UnconfiguredView(View::Century)));
        assert_eq!(b.state().view, View::Month);
    }

    #[test]
    fn controlled_current_date_ignores_moves_and_clamps_echo() {
        let mut b = binding(View::Month, d(2024, 6, 15), BindingMode::controlled());

        b.dispatch(Event::MoveForward);
        assert_eq!(b.state().current_date, d(2024, 6, 15));

        b.set_current_date(d(2200, 1, 1));
        assert_eq!(b.state().current_date, d(2099, 12, 31));
        assert_eq!(b.state().slide, SlideDirection::Left);
    }

    #[test]
    fn echoed_value_moves_uncontrolled_focus() {
        let mut b = binding(View::Month, d(2024, 6, 15), BindingMode::default());

        let notifications = b.set_value(Some(d(2030, 2, 2)));

        assert_eq!(b.state().current_date, d(2030, 2, 2));
        assert_eq!(
            notifications,
            vec![Notification::CurrentDateChange(d(2030, 2, 2))]
        );
    }
}
