use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Pointer cursor the host should show over the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorAffordance {
    Grab,
    Grabbing,
}

impl CursorAffordance {
    /// CSS/GTK cursor name.
    #[must_use]
    pub fn cursor_name(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Presentation-relevant transitions reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionEvent {
    PanStarted,
    PanEnded,
}

impl InteractionEvent {
    #[must_use]
    pub fn cursor(self) -> CursorAffordance {
        match self {
            Self::PanStarted => CursorAffordance::Grabbing,
            Self::PanEnded => CursorAffordance::Grab,
        }
    }
}

/// Tracking data for one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanState {
    pub is_panning: bool,
    pub last_pointer_x: f64,
}

impl Default for PanState {
    fn default() -> Self {
        Self {
            is_panning: false,
            last_pointer_x: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pan: PanState,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.pan.is_panning {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn pan_state(self) -> PanState {
        self.pan
    }

    #[must_use]
    pub fn cursor(self) -> CursorAffordance {
        match self.mode() {
            InteractionMode::Idle => CursorAffordance::Grab,
            InteractionMode::Panning => CursorAffordance::Grabbing,
        }
    }

    pub fn on_pan_start(&mut self, pointer_x: f64) -> InteractionEvent {
        self.pan = PanState {
            is_panning: true,
            last_pointer_x: pointer_x,
        };
        InteractionEvent::PanStarted
    }

    /// Records a new pointer position and returns the horizontal delta since
    /// the previous one, or `None` when no drag is active.
    pub fn on_pan_move(&mut self, pointer_x: f64) -> Option<f64> {
        if !self.pan.is_panning {
            return None;
        }
        let delta_x = pointer_x - self.pan.last_pointer_x;
        self.pan.last_pointer_x = pointer_x;
        Some(delta_x)
    }

    /// Ends the drag. Pointer-up and pointer-leave both land here.
    ///
    /// Returns `None` when no drag was active.
    pub fn on_pan_end(&mut self) -> Option<InteractionEvent> {
        if !self.pan.is_panning {
            return None;
        }
        self.pan.is_panning = false;
        Some(InteractionEvent::PanEnded)
    }

    pub fn reset(&mut self) {
        self.pan = PanState::default();
    }
}
