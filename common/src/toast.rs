/// Transient notification shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// Incremented for every toast so a dismissal timer only hides its own toast.
    pub generation: u64,
}

/// The single toast slot on the page.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    attached: bool,
    current: Option<Toast>,
    next_generation: u64,
}

impl ToastSlot {
    /// A slot with a rendered toast element.
    pub fn attached() -> Self {
        Self {
            attached: true,
            ..Self::default()
        }
    }

    /// A slot with no element to show toasts in; every `show` is ignored.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Show `message`, replacing any visible toast.
    /// Returns the generation to pass to [`ToastSlot::dismiss`], or `None` when detached.
    pub fn show(&mut self, message: impl Into<String>) -> Option<u64> {
        if !self.attached {
            return None;
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        self.current = Some(Toast {
            message: message.into(),
            generation,
        });
        Some(generation)
    }

    /// Hide the toast if it is still the one shown at `generation`.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(toast) if toast.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
