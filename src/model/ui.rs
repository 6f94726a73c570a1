//! Cosmetic surface state: interaction mode, fullscreen, hint bubble

/// Transient input state. Never persisted, never an error state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A keystroke mutated the content
    Editing,
    /// Pointer drag or shift+navigation is moving the focus
    Selecting,
}

/// What the hint bubble says
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Copied,
    CopyFailed,
}

impl HintKind {
    pub fn label(self) -> &'static str {
        match self {
            HintKind::Copied => "Copied",
            HintKind::CopyFailed => "Copy failed",
        }
    }
}

/// A visible hint bubble. `generation` ties it to the timer that dismisses
/// it, so a late timer for an older hint leaves a newer one alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub kind: HintKind,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub fullscreen: bool,
    pub hint: Option<Hint>,
    hint_generation: u64,
}

impl UiState {
    /// Show a hint, replacing any current one. Returns its generation.
    pub fn show_hint(&mut self, kind: HintKind) -> u64 {
        self.hint_generation += 1;
        self.hint = Some(Hint {
            kind,
            generation: self.hint_generation,
        });
        self.hint_generation
    }

    /// Hide the hint if it is still the one from `generation`
    pub fn dismiss_hint(&mut self, generation: u64) -> bool {
        match self.hint {
            Some(hint) if hint.generation == generation => {
                self.hint = None;
                true
            }
            _ => false,
        }
    }
}
