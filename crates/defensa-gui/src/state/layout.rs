//! Shared chrome state: sidebar, busy overlay and toast notifications.
//!
//! Passed explicitly through the layout composition instead of being
//! broadcast as global events; the busy indicator is a counter so that
//! overlapping requests nest correctly.

/// Layout state owned by the root and handed to the chrome views.
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub sidebar_open: bool,
    busy: u32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            busy: 0,
        }
    }
}

impl LayoutState {
    pub fn begin_busy(&mut self) {
        self.busy += 1;
    }

    pub fn end_busy(&mut self) {
        self.busy = self.busy.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.busy > 0
    }
}

/// Toast severity, mapped to accent colors in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient notification shown over the content and auto-dismissed.
#[derive(Debug, Clone)]
pub struct Toast {
    pub severity: ToastSeverity,
    pub title: String,
    pub detail: String,
}

impl Toast {
    fn new(severity: ToastSeverity, title: &str, detail: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.to_string(),
            detail: detail.into(),
        }
    }

    pub fn success(detail: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Success, "Éxito", detail)
    }

    pub fn info(detail: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Info, "Información", detail)
    }

    pub fn warning(detail: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Warning, "Alerta", detail)
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Error, "Error", detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_counter_nests() {
        let mut layout = LayoutState::default();
        assert!(!layout.is_busy());
        layout.begin_busy();
        layout.begin_busy();
        layout.end_busy();
        assert!(layout.is_busy());
        layout.end_busy();
        assert!(!layout.is_busy());
        // An unmatched end must not underflow.
        layout.end_busy();
        assert!(!layout.is_busy());
    }
}
