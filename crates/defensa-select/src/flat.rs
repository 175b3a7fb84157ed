use tracing::debug;

use crate::dependent::ResolveOutcome;
use crate::option::SelectOption;
use crate::source::SourceError;

/// Phase of a flat lookup list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Selection store for a single-level lookup list (areas, academic ranks,
/// majors, scientific categories).
///
/// Same token guard as [`crate::DependentSelect`], without the dependency
/// edge: reloads can overlap and only the latest one lands.
#[derive(Debug, Clone)]
pub struct FlatSelect<V> {
    options: Vec<SelectOption<V>>,
    selection: Option<V>,
    phase: LoadPhase,
    token: u64,
}

impl<V> Default for FlatSelect<V> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selection: None,
            phase: LoadPhase::Idle,
            token: 0,
        }
    }
}

impl<V: Clone + PartialEq> FlatSelect<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    pub fn selection(&self) -> Option<&V> {
        self.selection.as_ref()
    }

    /// Full option for the current selection, if any.
    pub fn selected_option(&self) -> Option<&SelectOption<V>> {
        let value = self.selection.as_ref()?;
        self.options.iter().find(|o| &o.value == value)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Start (or restart) a load, returning the token the response must
    /// carry back into [`FlatSelect::resolve`].
    pub fn begin_load(&mut self) -> u64 {
        self.token += 1;
        self.phase = LoadPhase::Loading;
        self.token
    }

    pub fn resolve(
        &mut self,
        token: u64,
        result: Result<Vec<SelectOption<V>>, SourceError>,
    ) -> ResolveOutcome {
        if token != self.token {
            debug!(token, current = self.token, "dropping stale catalog response");
            return ResolveOutcome::Stale;
        }
        match result {
            Ok(options) => {
                self.selection = self
                    .selection
                    .take()
                    .filter(|v| options.iter().any(|o| &o.value == v));
                self.options = options;
                self.phase = LoadPhase::Ready;
                ResolveOutcome::Applied
            }
            Err(error) => {
                self.selection = None;
                self.options.clear();
                self.phase = LoadPhase::Failed;
                ResolveOutcome::Failed(error)
            }
        }
    }

    /// Tentatively install a selection before the list has loaded, as when
    /// an edit form seeds the control from a stored record. The next
    /// [`FlatSelect::resolve`] keeps it only if the arriving list contains it.
    pub fn preselect(&mut self, value: Option<V>) {
        self.selection = value;
    }

    /// Select a value (must be in the current list) or clear the selection.
    pub fn select(&mut self, value: Option<V>) -> bool {
        match value {
            None => {
                self.selection = None;
                true
            }
            Some(v) => {
                if self.phase == LoadPhase::Ready && self.options.iter().any(|o| o.value == v) {
                    self.selection = Some(v);
                    true
                } else {
                    false
                }
            }
        }
    }
}
