//! Framework-free state machine behind the `Collapsible` component.
//!
//! The component is either `Open` or `Closed`. The only edge between the two
//! is a toggle, which can be triggered by a click or by a change of the
//! externally supplied `open` intent. Each toggle recomputes the maximum
//! height the content container may occupy; the rendering layer applies it
//! and the stylesheet animates it.

use crate::config::CollapsibleConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extra room added to the measured content height while open, so the
/// max-height transition never clips content that grows slightly.
pub const OPEN_HEIGHT_MARGIN: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    #[default]
    Open,
    Closed,
}

impl ToggleState {
    pub fn from_open(open: bool) -> Self {
        if open {
            ToggleState::Open
        } else {
            ToggleState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ToggleState::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ToggleState::Open => ToggleState::Closed,
            ToggleState::Closed => ToggleState::Open,
        }
    }

    /// Value used for the `data-state` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleState::Open => "open",
            ToggleState::Closed => "closed",
        }
    }
}

impl From<bool> for ToggleState {
    fn from(open: bool) -> Self {
        ToggleState::from_open(open)
    }
}

impl From<ToggleState> for bool {
    fn from(state: ToggleState) -> Self {
        state.is_open()
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout measurements taken from the rendered tree at toggle time.
///
/// `content_height` is `None` when the content region was not mounted (or
/// could not be measured); that case counts as zero-height content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutSnapshot {
    pub content_height: Option<f64>,
}

impl LayoutSnapshot {
    pub fn measured(content_height: f64) -> Self {
        Self {
            content_height: Some(content_height),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    /// Natural height of the content in pixels. Non-finite or negative
    /// measurements are clamped to zero.
    pub fn natural_height(&self) -> f64 {
        match self.content_height {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => 0.0,
        }
    }
}

/// Derived maximum height of the content container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MaxHeight {
    /// Open, but nothing has been measured yet; no constraint is applied.
    #[default]
    Unconstrained,
    Px(f64),
}

impl MaxHeight {
    /// Target height after a toggle into `toggle`.
    pub fn for_state(toggle: ToggleState, layout: &LayoutSnapshot) -> Self {
        match toggle {
            ToggleState::Open => MaxHeight::Px(layout.natural_height() + OPEN_HEIGHT_MARGIN),
            ToggleState::Closed => MaxHeight::Px(0.0),
        }
    }

    pub fn px(&self) -> Option<f64> {
        match self {
            MaxHeight::Unconstrained => None,
            MaxHeight::Px(v) => Some(*v),
        }
    }

    /// Inline style declaration, or `None` while unconstrained.
    pub fn to_css(&self) -> Option<String> {
        self.px().map(|v| format!("max-height: {v}px"))
    }
}

/// Complete state of one collapsible instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollapsibleState {
    toggle: ToggleState,
    /// Last value seen of the external open intent.
    external_open: Option<bool>,
    max_height: MaxHeight,
}

impl CollapsibleState {
    pub fn new(initially_open: bool) -> Self {
        let toggle = ToggleState::from_open(initially_open);
        Self {
            toggle,
            external_open: None,
            max_height: Self::initial_max_height(toggle),
        }
    }

    /// Build the initial state. An external `open` value, when given, wins
    /// over `initially_open` and becomes the baseline for change detection.
    pub fn from_config(config: &CollapsibleConfig) -> Self {
        let toggle = ToggleState::from_open(config.open.unwrap_or(config.initially_open));
        Self {
            toggle,
            external_open: config.open,
            max_height: Self::initial_max_height(toggle),
        }
    }

    // A closed panel has to render collapsed before anything is measured.
    fn initial_max_height(toggle: ToggleState) -> MaxHeight {
        match toggle {
            ToggleState::Open => MaxHeight::Unconstrained,
            ToggleState::Closed => MaxHeight::Px(0.0),
        }
    }

    pub fn toggle_state(&self) -> ToggleState {
        self.toggle
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    pub fn max_height(&self) -> MaxHeight {
        self.max_height
    }

    pub fn external_open(&self) -> Option<bool> {
        self.external_open
    }

    /// Whether an external value of `next` would flip the panel.
    pub fn needs_resync(&self, next: bool) -> bool {
        self.external_open != Some(next) && next != self.is_open()
    }

    fn toggled(&self, layout: &LayoutSnapshot) -> Self {
        let toggle = self.toggle.toggled();
        Self {
            toggle,
            external_open: self.external_open,
            max_height: MaxHeight::for_state(toggle, layout),
        }
    }
}

impl Default for CollapsibleState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollapsibleEvent {
    /// The title was clicked.
    Toggle(LayoutSnapshot),
    /// The external open intent was (re)delivered by the host.
    ExternalOpenChanged { next: bool, layout: LayoutSnapshot },
    /// Remember the external open intent without flipping.
    ExternalOpenRecorded(bool),
    /// A measurement for an earlier [`CollapsibleEvent::ExternalOpenRecorded`]
    /// resolved. Flips only if `expected` is still the latest external value
    /// and the panel does not already match it.
    Resync { expected: bool, layout: LayoutSnapshot },
}

/// Pure transition function.
///
/// The external intent is edge-triggered: it only resynchronizes when it
/// differs from the previous external value, so a user toggle is never undone
/// by a re-render that repeats the same external value.
pub fn transition(state: &CollapsibleState, event: CollapsibleEvent) -> CollapsibleState {
    match event {
        CollapsibleEvent::Toggle(layout) => state.toggled(&layout),
        CollapsibleEvent::ExternalOpenChanged { next, layout } => {
            if state.external_open == Some(next) {
                return *state;
            }
            let recorded = CollapsibleState {
                external_open: Some(next),
                ..*state
            };
            if next != recorded.is_open() {
                recorded.toggled(&layout)
            } else {
                recorded
            }
        }
        CollapsibleEvent::ExternalOpenRecorded(next) => CollapsibleState {
            external_open: Some(next),
            ..*state
        },
        CollapsibleEvent::Resync { expected, layout } => {
            if state.external_open == Some(expected) && expected != state.is_open() {
                state.toggled(&layout)
            } else {
                *state
            }
        }
    }
}

pub type SubscriptionId = usize;

type Subscriber = Box<dyn FnMut(&CollapsibleState)>;
type ChangeListener = Box<dyn FnMut(bool)>;

/// State container that applies [`transition`] and notifies observers.
///
/// Subscribers see every state change. The change listener only fires when
/// the open flag actually flips, with the new value.
pub struct CollapsibleStore {
    state: CollapsibleState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: SubscriptionId,
    on_change: Option<ChangeListener>,
}

impl CollapsibleStore {
    pub fn new(state: CollapsibleState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_id: 0,
            on_change: None,
        }
    }

    pub fn from_config(config: &CollapsibleConfig) -> Self {
        Self::new(CollapsibleState::from_config(config))
    }

    pub fn with_on_change(mut self, listener: impl FnMut(bool) + 'static) -> Self {
        self.set_on_change(listener);
        self
    }

    pub fn set_on_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn state(&self) -> &CollapsibleState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn max_height(&self) -> MaxHeight {
        self.state.max_height()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&CollapsibleState) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Apply `event`. Returns the new open value if the panel flipped.
    pub fn dispatch(&mut self, event: CollapsibleEvent) -> Option<bool> {
        let next = transition(&self.state, event);
        if next == self.state {
            tracing::trace!(?event, "collapsible event ignored");
            return None;
        }
        let flipped = next.toggle_state() != self.state.toggle_state();
        self.state = next;

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }

        if !flipped {
            return None;
        }
        let open = self.state.is_open();
        tracing::debug!(
            state = %self.state.toggle_state(),
            max_height = ?self.state.max_height(),
            "collapsible toggled"
        );
        if let Some(listener) = self.on_change.as_mut() {
            listener(open);
        }
        Some(open)
    }

    /// Flip the panel. Returns the new open value.
    pub fn toggle(&mut self, layout: LayoutSnapshot) -> bool {
        self.dispatch(CollapsibleEvent::Toggle(layout))
            .unwrap_or_else(|| self.state.is_open())
    }

    pub fn on_external_open_change(&mut self, next: bool, layout: LayoutSnapshot) -> Option<bool> {
        self.dispatch(CollapsibleEvent::ExternalOpenChanged { next, layout })
    }

    /// First half of an external change, for hosts that must measure
    /// asynchronously: record `next` right away and report whether a
    /// [`CollapsibleStore::resync`] is needed once the layout is known.
    ///
    /// Recording eagerly means a later external change is compared with
    /// this value even while the measurement is still pending.
    pub fn record_external_open(&mut self, next: bool) -> bool {
        if self.state.external_open() == Some(next) {
            return false;
        }
        let needs_resync = self.state.needs_resync(next);
        self.dispatch(CollapsibleEvent::ExternalOpenRecorded(next));
        needs_resync
    }

    /// Second half of an external change to `expected`. A no-op if another
    /// external value was recorded in the meantime, or if the panel already
    /// matches.
    pub fn resync(&mut self, expected: bool, layout: LayoutSnapshot) -> Option<bool> {
        self.dispatch(CollapsibleEvent::Resync { expected, layout })
    }
}

impl Default for CollapsibleStore {
    fn default() -> Self {
        Self::new(CollapsibleState::default())
    }
}

impl fmt::Debug for CollapsibleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapsibleStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
