//! Calendar navigation state machine.
//!
//! [`NavigationController`] holds the immutable configuration (range, views,
//! mirroring) and exposes every transition as a pure function
//! `(&NavigationState, input) -> TransitionResult`. It never stores the
//! state itself; whoever owns the state (see [`crate::state::binding`])
//! decides what to keep.
//!
//! # Transitions
//!
//! - **Drill up / down**: move to the next coarser / finer configured view.
//!   No-op at the ends of the configured list.
//! - **Page move**: step the focused date by one page (`View::step`). When
//!   the step leaves the visible page (compared at the view's own
//!   granularity) it becomes a navigation; otherwise it only refocuses.
//! - **Navigate**: move to an explicit target if it is in range at the
//!   target view's granularity; silently ignored otherwise.
//! - **Activate**: commit the focused date at the finest view, drill down
//!   anywhere else.
//! - **Footer jump**: commit a date, then navigate to the finest view when
//!   it is in range there.

use crate::input::{self, InputAction, Key};
use crate::model::date::{self, DateRange};
use crate::model::{CalendarError, Direction, Granularity, Notification, SlideDirection, View, Views};
use crate::state::slide::slide_direction;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

// ===== Configuration =====

/// Caller-supplied configuration for a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Earliest selectable date (inclusive).
    pub min: NaiveDate,
    /// Latest selectable date (inclusive).
    pub max: NaiveDate,
    /// Ordered view levels, finest first.
    pub views: Vec<View>,
    /// View to start in. Defaults to the finest configured view.
    pub initial_view: Option<View>,
    /// Date to focus initially. Defaults to `initial_value`, then today.
    pub initial_date: Option<NaiveDate>,
    /// Initially committed value.
    pub initial_value: Option<NaiveDate>,
    /// Right-to-left mode: horizontal arrow keys are mirrored.
    pub rtl: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let range = DateRange::default();
        Self {
            min: range.min(),
            max: range.max(),
            views: View::ALL.to_vec(),
            initial_view: None,
            initial_date: None,
            initial_value: None,
            rtl: false,
        }
    }
}

// ===== State =====

/// Complete navigation state. Replaced as a whole by every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// Displayed view level; always one of the configured views.
    pub view: View,
    /// Focused date; always within the configured range.
    pub current_date: NaiveDate,
    /// Committed selection, distinct from the focused date.
    pub value: Option<NaiveDate>,
    /// Last computed animation hint.
    pub slide: SlideDirection,
}

/// Outcome of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// State after the transition (identical to the input for a no-op).
    pub state: NavigationState,
    /// Notifications in emission order.
    pub notifications: Vec<Notification>,
}

impl TransitionResult {
    fn unchanged(state: &NavigationState) -> Self {
        Self {
            state: *state,
            notifications: Vec::new(),
        }
    }

    /// True when the transition emitted nothing.
    pub fn is_noop(&self) -> bool {
        self.notifications.is_empty()
    }
}

/// Every input the controller accepts, for hosts that prefer a single
/// dispatch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press, with the Ctrl/Cmd modifier state.
    Key {
        /// Key identifier.
        key: Key,
        /// Whether Ctrl (or Cmd) was held.
        ctrl: bool,
    },
    /// A cell of the current page was activated.
    CellActivate(NaiveDate),
    /// The footer "today" button was activated with the host's current date.
    FooterActivate(NaiveDate),
    /// Header drill-up button.
    DrillUp,
    /// Drill down keeping the focused date.
    DrillDown,
    /// Header "previous page" button.
    MoveBack,
    /// Header "next page" button.
    MoveForward,
    /// Move focus by one cell (Left/Right) or one grid row (Up/Down).
    CellMove(Direction),
}

// ===== Draft =====

/// Working copy of a state while a transition collects its notifications.
struct Draft {
    view: View,
    current_date: NaiveDate,
    value: Option<NaiveDate>,
    notifications: Vec<Notification>,
}

impl Draft {
    fn new(state: &NavigationState) -> Self {
        Self {
            view: state.view,
            current_date: state.current_date,
            value: state.value,
            notifications: Vec::new(),
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Refocus `date` unless it is the same cell at `unit`.
    fn set_current_date(&mut self, date: NaiveDate, unit: Granularity) {
        if date::eq(date, self.current_date, unit) {
            return;
        }
        self.current_date = date;
        self.notify(Notification::CurrentDateChange(date));
    }

    fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        self.view = view;
        self.notify(Notification::ViewChange(view));
    }

    fn commit(&mut self, date: NaiveDate) {
        self.value = Some(date);
        self.notify(Notification::Change(date));
    }
}

// ===== NavigationController =====

/// Pure reducer over [`NavigationState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    range: DateRange,
    views: Views,
    rtl: bool,
}

impl NavigationController {
    /// Build a controller from already validated parts.
    pub fn new(range: DateRange, views: Views, rtl: bool) -> Self {
        Self { range, views, rtl }
    }

    /// Validate `config` and build the initial state.
    ///
    /// The focused date defaults to the initial value, then to `today`, and
    /// is clamped into range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] for `min > max`, an empty or duplicated view
    /// list, or an initial view that is not configured.
    pub fn initialize(
        config: &CalendarConfig,
        today: NaiveDate,
    ) -> Result<(Self, NavigationState), CalendarError> {
        let range = DateRange::new(config.min, config.max)?;
        let views = Views::new(config.views.iter().copied())?;

        let view = match config.initial_view {
            Some(view) if views.contains(view) => view,
            Some(view) => return Err(CalendarError::UnconfiguredView(view)),
            None => views.finest(),
        };

        let current_date = range.clamp(
            config
                .initial_date
                .or(config.initial_value)
                .unwrap_or(today),
        );

        let state = NavigationState {
            view,
            current_date,
            value: config.initial_value,
            slide: SlideDirection::None,
        };

        debug!(
            %view,
            %current_date,
            min = %range.min(),
            max = %range.max(),
            rtl = config.rtl,
            "Calendar initialized"
        );

        Ok((Self::new(range, views, config.rtl), state))
    }

    /// Selectable date range.
    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Configured view levels, finest first.
    pub fn views(&self) -> &Views {
        &self.views
    }

    /// Whether plain horizontal keys are mirrored.
    pub fn rtl(&self) -> bool {
        self.rtl
    }

    /// Single dispatch point over [`Event`].
    pub fn reduce(&self, state: &NavigationState, event: Event) -> TransitionResult {
        match event {
            Event::Key { key, ctrl } => self.handle_key(state, key, ctrl),
            Event::CellActivate(date) => self.handle_cell_activate(state, date),
            Event::FooterActivate(today) => self.handle_footer_activate(state, today),
            Event::DrillUp => self.handle_drill_up(state),
            Event::DrillDown => self.handle_drill_down(state),
            Event::MoveBack => self.handle_move_back(state),
            Event::MoveForward => self.handle_move_forward(state),
            Event::CellMove(direction) => self.handle_cell_move(state, direction),
        }
    }

    /// Handle a key press.
    ///
    /// Up/Down drill, Enter activates the focused date. Left/Right perform a
    /// page move, or with `ctrl` navigate straight to the page-step target.
    /// Plain horizontal keys are mirrored in right-to-left mode; ctrl
    /// navigation never is.
    pub fn handle_key(&self, state: &NavigationState, key: Key, ctrl: bool) -> TransitionResult {
        match input::resolve(key, self.rtl && !ctrl) {
            None => TransitionResult::unchanged(state),
            Some(InputAction::Activate) => self.activate(state, state.current_date),
            Some(InputAction::Move(Direction::Up)) => self.handle_drill_up(state),
            Some(InputAction::Move(Direction::Down)) => self.handle_drill_down(state),
            Some(InputAction::Move(direction)) if ctrl => self.navigate(state, direction, None),
            Some(InputAction::Move(direction)) => self.page_move(state, direction),
        }
    }

    /// A cell of the current page was activated.
    pub fn handle_cell_activate(&self, state: &NavigationState, date: NaiveDate) -> TransitionResult {
        self.activate(state, date)
    }

    /// Jump to `today`: always commits it, and navigates to the finest view
    /// when `today` is in range there.
    pub fn handle_footer_activate(
        &self,
        state: &NavigationState,
        today: NaiveDate,
    ) -> TransitionResult {
        let mut draft = Draft::new(state);
        draft.commit(today);

        let finest = self.views.finest();
        if self.range.contains(today, finest.granularity()) {
            let direction = if finest != state.view {
                Direction::Down
            } else if today > state.current_date {
                Direction::Right
            } else {
                Direction::Left
            };
            draft.notify(Notification::Navigate {
                date: today,
                slide: direction.slide(),
                view: finest,
            });
            draft.set_current_date(self.range.clamp(today), finest.unit());
            draft.set_view(finest);
        } else {
            trace!(%today, "Footer date outside range, value committed without navigation");
        }

        self.finish(state, draft)
    }

    /// Header drill-up button: move to the next coarser view.
    pub fn handle_drill_up(&self, state: &NavigationState) -> TransitionResult {
        self.navigate(state, Direction::Up, None)
    }

    /// Move to the next finer view, keeping the focused date.
    pub fn handle_drill_down(&self, state: &NavigationState) -> TransitionResult {
        self.navigate(state, Direction::Down, None)
    }

    /// Header "previous page" button. Never mirrored.
    pub fn handle_move_back(&self, state: &NavigationState) -> TransitionResult {
        self.navigate(state, Direction::Left, None)
    }

    /// Header "next page" button. Never mirrored.
    pub fn handle_move_forward(&self, state: &NavigationState) -> TransitionResult {
        self.navigate(state, Direction::Right, None)
    }

    /// Move focus to a neighbouring cell.
    ///
    /// Left/Right step one cell unit, Up/Down one grid row. A target outside
    /// the range at the cell unit keeps the current date. Horizontal moves
    /// are mirrored in right-to-left mode.
    pub fn handle_cell_move(
        &self,
        state: &NavigationState,
        direction: Direction,
    ) -> TransitionResult {
        let direction = if self.rtl {
            direction.mirrored()
        } else {
            direction
        };
        let view = state.view;
        let unit = view.unit();
        let amount = match direction {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -view.row_len(),
            Direction::Down => view.row_len(),
        };

        let candidate = date::add(state.current_date, amount, unit)
            .filter(|date| self.range.contains(*date, unit))
            .unwrap_or(state.current_date);

        self.settle(state, candidate)
    }

    /// Host echoed a (possibly new) committed value back.
    ///
    /// When it differs from the previous value at the current view's cell
    /// unit, the focused date follows the clamped new value.
    pub fn reconcile(&self, state: &NavigationState, value: Option<NaiveDate>) -> TransitionResult {
        let unit = state.view.unit();
        let clamped = self.range.clamp_opt(value);
        let changed = match (clamped, state.value) {
            (Some(new), Some(old)) => !date::eq(new, old, unit),
            (None, None) => false,
            _ => true,
        };

        let mut draft = Draft::new(state);
        draft.value = value;
        if let (true, Some(date)) = (changed, clamped) {
            draft.set_current_date(date, unit);
        }
        self.finish(state, draft)
    }

    // ===== Availability queries =====

    /// False at the coarsest configured view.
    pub fn can_drill_up(&self, state: &NavigationState) -> bool {
        !self.views.is_coarsest(state.view)
    }

    /// False at the finest configured view.
    pub fn can_drill_down(&self, state: &NavigationState) -> bool {
        !self.views.is_finest(state.view)
    }

    /// Whether the header button for `direction` would navigate anywhere.
    pub fn can_move(&self, state: &NavigationState, direction: Direction) -> bool {
        self.page_target(state, direction)
            .is_some_and(|target| self.range.contains(target, state.view.granularity()))
    }

    /// Whether `today` is reachable at the current view; hosts disable the
    /// footer otherwise.
    pub fn today_in_range(&self, state: &NavigationState, today: NaiveDate) -> bool {
        self.range.contains(today, state.view.granularity())
    }

    /// Focused date moved one page in `direction`. `None` for vertical
    /// directions or on overflow.
    pub fn page_target(&self, state: &NavigationState, direction: Direction) -> Option<NaiveDate> {
        let forward = match direction {
            Direction::Left => false,
            Direction::Right => true,
            Direction::Up | Direction::Down => return None,
        };
        self.views.step_of(state.view).apply(state.current_date, forward)
    }

    // ===== Internals =====

    fn activate(&self, state: &NavigationState, date: NaiveDate) -> TransitionResult {
        if !self.views.is_finest(state.view) {
            return self.navigate(state, Direction::Down, Some(date));
        }

        let mut draft = Draft::new(state);
        draft.set_current_date(self.range.clamp(date), state.view.unit());
        let committed = draft.current_date;
        draft.commit(committed);
        debug!(value = %committed, "Value committed");
        self.finish(state, draft)
    }

    fn page_move(&self, state: &NavigationState, direction: Direction) -> TransitionResult {
        match self.page_target(state, direction) {
            Some(candidate) => self.settle(state, candidate),
            None => TransitionResult::unchanged(state),
        }
    }

    /// Apply a refocus candidate.
    ///
    /// Same cell: no-op. Different page at the view's own granularity:
    /// navigate in the matching direction. Same page: plain refocus.
    fn settle(&self, state: &NavigationState, candidate: NaiveDate) -> TransitionResult {
        let view = state.view;
        if date::eq(candidate, state.current_date, view.unit()) {
            trace!(%candidate, %view, "Move stays on the focused cell");
            return TransitionResult::unchanged(state);
        }

        if date::gt(candidate, state.current_date, view.granularity()) {
            self.navigate(state, Direction::Right, Some(candidate))
        } else if date::lt(candidate, state.current_date, view.granularity()) {
            self.navigate(state, Direction::Left, Some(candidate))
        } else {
            let mut draft = Draft::new(state);
            draft.set_current_date(self.range.clamp(candidate), view.unit());
            self.finish(state, draft)
        }
    }

    fn navigate(
        &self,
        state: &NavigationState,
        direction: Direction,
        target: Option<NaiveDate>,
    ) -> TransitionResult {
        let view = match direction {
            Direction::Up => self.views.next(state.view),
            Direction::Down => self.views.prev(state.view),
            Direction::Left | Direction::Right => state.view,
        };
        if !direction.is_horizontal() && view == state.view {
            trace!(view = %state.view, ?direction, "No further view to drill into");
            return TransitionResult::unchanged(state);
        }

        let target = match target {
            Some(date) => date,
            None if direction.is_horizontal() => match self.page_target(state, direction) {
                Some(date) => date,
                None => return TransitionResult::unchanged(state),
            },
            None => state.current_date,
        };

        if !self.range.contains(target, view.granularity()) {
            trace!(%target, %view, "Navigation target outside range");
            return TransitionResult::unchanged(state);
        }

        let mut draft = Draft::new(state);
        draft.notify(Notification::Navigate {
            date: target,
            slide: direction.slide(),
            view,
        });
        draft.set_current_date(self.range.clamp(target), state.view.unit());
        draft.set_view(view);

        debug!(%target, %view, ?direction, "Navigated");
        self.finish(state, draft)
    }

    fn finish(&self, old: &NavigationState, draft: Draft) -> TransitionResult {
        let mut state = NavigationState {
            view: draft.view,
            current_date: draft.current_date,
            value: draft.value,
            slide: old.slide,
        };
        state.slide = slide_direction(&self.views, old, &state);
        TransitionResult {
            state,
            notifications: draft.notifications,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
