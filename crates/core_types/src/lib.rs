/// Legacy DOM `keyCode` values the remote control reacts to.
pub type KeyCode = u32;

pub const KEY_TAB: KeyCode = 9;
pub const KEY_SPACE: KeyCode = 32;
pub const KEY_PAGE_UP: KeyCode = 33;
pub const KEY_PAGE_DOWN: KeyCode = 34;
pub const KEY_LEFT: KeyCode = 37;
pub const KEY_UP: KeyCode = 38;
pub const KEY_RIGHT: KeyCode = 39;
pub const KEY_DOWN: KeyCode = 40;

/// What a listener asks the host to do with the event it just handled.
///
/// Handlers never touch the host event directly; the host applies the
/// outcome (`preventDefault`, `stopImmediatePropagation`) after the call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub prevent_default: bool,
    pub stop_immediate_propagation: bool,
}

impl EventOutcome {
    pub const NONE: Self = Self {
        prevent_default: false,
        stop_immediate_propagation: false,
    };

    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_immediate_propagation: false,
    };

    pub const CONSUMED: Self = Self {
        prevent_default: true,
        stop_immediate_propagation: true,
    };

    pub fn merge(self, other: Self) -> Self {
        Self {
            prevent_default: self.prevent_default || other.prevent_default,
            stop_immediate_propagation: self.stop_immediate_propagation
                || other.stop_immediate_propagation,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Snapshot of a `touchstart`: every active touch point's client x, and the
/// viewport width at the time of the event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchStart {
    pub touches: Vec<f32>,
    pub viewport_width: f32,
}

impl TouchStart {
    pub fn single(x: f32, viewport_width: f32) -> Self {
        Self {
            touches: vec![x],
            viewport_width,
        }
    }
}

/// Result of mapping a touch onto the screen's activation bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchZone {
    Left,
    Right,
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_any_requested_action() {
        let merged = EventOutcome::PREVENT_DEFAULT.merge(EventOutcome::NONE);
        assert_eq!(merged, EventOutcome::PREVENT_DEFAULT);

        let merged = EventOutcome::NONE.merge(EventOutcome::CONSUMED);
        assert_eq!(merged, EventOutcome::CONSUMED);
    }

    #[test]
    fn default_outcome_is_none() {
        assert!(EventOutcome::default().is_none());
        assert!(!EventOutcome::PREVENT_DEFAULT.is_none());
    }
}
