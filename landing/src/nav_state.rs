//! Header interaction state.
//!
//! Two independent pieces: which top-level dropdown is open (at most one) and
//! whether the mobile panel is expanded. The header keeps one [`NavState`] in
//! an `RwSignal` and feeds every pointer/tap event through these methods.

use crate::menu::MenuKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: Option<MenuKey>,
    mobile_open: bool,
}

impl NavState {
    pub fn open_dropdown(&self) -> Option<MenuKey> {
        self.open
    }

    pub fn is_open(&self, key: MenuKey) -> bool {
        self.open == Some(key)
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Pointer entered a trigger or its panel (desktop).
    pub fn hover_enter(&mut self, key: MenuKey) {
        if self.open != Some(key) {
            tracing::debug!(key = key.index(), "dropdown open (hover)");
        }
        self.open = Some(key);
    }

    /// Pointer left a trigger or its panel (desktop).
    pub fn hover_leave(&mut self) {
        if let Some(key) = self.open.take() {
            tracing::debug!(key = key.index(), "dropdown close (hover)");
        }
    }

    /// Trigger tapped inside the mobile panel.
    pub fn tap(&mut self, key: MenuKey) {
        self.open = if self.open == Some(key) { None } else { Some(key) };
        tracing::debug!(key = key.index(), open = self.open.is_some(), "dropdown tap");
    }

    /// Hamburger/close control. Collapsing also drops any open dropdown so
    /// nothing stays expanded inside a hidden panel.
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
        if !self.mobile_open {
            self.open = None;
        }
        tracing::debug!(open = self.mobile_open, "mobile panel toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(index: usize) -> MenuKey {
        MenuKey::new(index)
    }

    #[test]
    fn starts_closed() {
        let state = NavState::default();
        assert_eq!(state.open_dropdown(), None);
        assert!(!state.is_mobile_open());
    }

    #[test]
    fn hover_opens_and_leave_closes() {
        let mut state = NavState::default();
        state.hover_enter(key(0));
        assert!(state.is_open(key(0)));
        state.hover_leave();
        assert_eq!(state.open_dropdown(), None);
    }

    #[test]
    fn moving_from_trigger_to_panel_keeps_it_open() {
        let mut state = NavState::default();
        state.hover_enter(key(0));
        // trigger mouseleave, then panel mouseenter
        state.hover_leave();
        state.hover_enter(key(0));
        assert!(state.is_open(key(0)));
    }

    #[test]
    fn opening_another_dropdown_closes_the_first() {
        let mut state = NavState::default();
        state.hover_enter(key(0));
        state.hover_enter(key(2));
        assert!(!state.is_open(key(0)));
        assert!(state.is_open(key(2)));

        state.tap(key(0));
        assert!(state.is_open(key(0)));
        assert!(!state.is_open(key(2)));
    }

    #[test]
    fn tap_toggles_same_entry() {
        let mut state = NavState::default();
        state.tap(key(1));
        assert!(state.is_open(key(1)));
        state.tap(key(1));
        assert_eq!(state.open_dropdown(), None);
    }

    #[test]
    fn mobile_toggle_twice_restores_initial_state() {
        let initial = NavState::default();
        let mut state = initial;
        state.toggle_mobile();
        assert!(state.is_mobile_open());
        state.toggle_mobile();
        assert_eq!(state, initial);
    }

    #[test]
    fn collapsing_mobile_panel_resets_dropdown() {
        let mut state = NavState::default();
        state.toggle_mobile();
        state.tap(key(0));
        assert!(state.is_open(key(0)));
        state.toggle_mobile();
        assert!(!state.is_mobile_open());
        assert_eq!(state.open_dropdown(), None);
    }

    #[test]
    fn opening_mobile_panel_leaves_dropdown_alone() {
        let mut state = NavState::default();
        state.hover_enter(key(3));
        state.toggle_mobile();
        assert!(state.is_mobile_open());
        assert!(state.is_open(key(3)));
    }

    #[test]
    fn hover_leave_without_open_dropdown_is_harmless() {
        let mut state = NavState::default();
        state.hover_leave();
        assert_eq!(state, NavState::default());
    }
}
