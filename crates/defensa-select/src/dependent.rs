use tracing::debug;

use crate::option::SelectOption;
use crate::source::SourceError;

/// Phase of the dependent (secondary) option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondaryPhase {
    /// No primary selected; the secondary list is empty.
    #[default]
    Empty,
    /// A fetch for the current primary is in flight.
    Loading,
    /// Options populated for the current primary.
    Ready,
    /// The fetch for the current primary failed; the list stays empty.
    Failed,
}

/// A fetch the owner must run and answer via [`DependentSelect::resolve`].
///
/// The token identifies the request; a response presented with a token that
/// is no longer current is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest<V> {
    pub token: u64,
    pub primary: V,
}

/// What presenting a response to the store did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Options applied; the secondary list is `Ready`.
    Applied,
    /// The response belonged to a superseded request and was discarded.
    Stale,
    /// The fetch failed. The error is handed back exactly once for display.
    Failed(SourceError),
}

/// Selection store for a primary/secondary dropdown pair.
///
/// Owns the selection state machine: selecting a primary value invalidates
/// the secondary selection, requests the scoped option list, and applies
/// responses in "latest request wins" order. Rapid primary switching is the
/// one real race here: each `select_primary` bumps the token, so a list
/// that arrives for an earlier primary can never be installed.
///
/// The store is generic over the identifier type; the location cascade keys
/// by numeric id but nothing here depends on that.
#[derive(Debug, Clone)]
pub struct DependentSelect<V> {
    primary_options: Vec<SelectOption<V>>,
    secondary_options: Vec<SelectOption<V>>,
    primary: Option<V>,
    secondary: Option<V>,
    phase: SecondaryPhase,
    token: u64,
    preset: Option<V>,
}

impl<V> Default for DependentSelect<V> {
    fn default() -> Self {
        Self {
            primary_options: Vec::new(),
            secondary_options: Vec::new(),
            primary: None,
            secondary: None,
            phase: SecondaryPhase::Empty,
            token: 0,
            preset: None,
        }
    }
}

impl<V: Clone + PartialEq> DependentSelect<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the primary option list (loaded by the owner, typically once
    /// per form mount).
    pub fn set_primary_options(&mut self, options: Vec<SelectOption<V>>) {
        self.primary_options = options;
    }

    pub fn primary_options(&self) -> &[SelectOption<V>] {
        &self.primary_options
    }

    pub fn secondary_options(&self) -> &[SelectOption<V>] {
        &self.secondary_options
    }

    pub fn primary(&self) -> Option<&V> {
        self.primary.as_ref()
    }

    pub fn secondary(&self) -> Option<&V> {
        self.secondary.as_ref()
    }

    /// Full option for the current primary selection, if any.
    pub fn selected_primary(&self) -> Option<&SelectOption<V>> {
        let value = self.primary.as_ref()?;
        self.primary_options.iter().find(|o| &o.value == value)
    }

    /// Full option for the current secondary selection, if any.
    pub fn selected_secondary(&self) -> Option<&SelectOption<V>> {
        let value = self.secondary.as_ref()?;
        self.secondary_options.iter().find(|o| &o.value == value)
    }

    pub fn phase(&self) -> SecondaryPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SecondaryPhase::Loading
    }

    /// Whether the secondary dropdown should accept input.
    pub fn secondary_enabled(&self) -> bool {
        self.primary.is_some() && self.phase == SecondaryPhase::Ready
    }

    /// User selected (or cleared) the primary value.
    ///
    /// Clearing resets the pair and supersedes any in-flight fetch. A new
    /// value clears the secondary selection immediately and returns the
    /// fetch to run. Re-selecting the current value is a no-op while the
    /// list is loading or ready, but re-issues the fetch from
    /// `Failed`/`Empty` so one bad response does not poison the pair.
    pub fn select_primary(&mut self, value: Option<V>) -> Option<FetchRequest<V>> {
        self.preset = None;
        match value {
            None => {
                self.token += 1; // supersede any in-flight fetch
                self.primary = None;
                self.secondary = None;
                self.secondary_options.clear();
                self.phase = SecondaryPhase::Empty;
                None
            }
            Some(v) => {
                if self.primary.as_ref() == Some(&v)
                    && matches!(self.phase, SecondaryPhase::Loading | SecondaryPhase::Ready)
                {
                    return None;
                }
                Some(self.begin_fetch(v, None))
            }
        }
    }

    /// Seed the pair from a stored record (edit mode).
    ///
    /// The secondary value is kept tentatively while its option list loads
    /// and is only dropped if the arriving list does not contain it.
    pub fn apply_preset(&mut self, primary: V, secondary: V) -> FetchRequest<V> {
        self.begin_fetch(primary, Some(secondary))
    }

    fn begin_fetch(&mut self, primary: V, preset: Option<V>) -> FetchRequest<V> {
        self.token += 1;
        self.primary = Some(primary.clone());
        self.secondary = preset.clone();
        self.preset = preset;
        self.secondary_options.clear();
        self.phase = SecondaryPhase::Loading;
        FetchRequest {
            token: self.token,
            primary,
        }
    }

    /// Present the result of a fetch issued by `select_primary`/`apply_preset`.
    pub fn resolve(
        &mut self,
        token: u64,
        result: Result<Vec<SelectOption<V>>, SourceError>,
    ) -> ResolveOutcome {
        if token != self.token {
            debug!(token, current = self.token, "dropping stale options response");
            return ResolveOutcome::Stale;
        }
        match result {
            Ok(options) => {
                // Keep the selection (user pick or preset) only if the new
                // list still contains it.
                self.secondary = self
                    .secondary
                    .take()
                    .filter(|v| options.iter().any(|o| &o.value == v));
                self.secondary_options = options;
                self.preset = None;
                self.phase = SecondaryPhase::Ready;
                ResolveOutcome::Applied
            }
            Err(error) => {
                self.secondary = None;
                self.secondary_options.clear();
                self.preset = None;
                self.phase = SecondaryPhase::Failed;
                ResolveOutcome::Failed(error)
            }
        }
    }

    /// User selected a secondary value. Only legal while `Ready`, and only
    /// for values in the current list. An event raised against an already
    /// replaced list must not install an orphan value.
    pub fn select_secondary(&mut self, value: V) -> bool {
        if self.phase != SecondaryPhase::Ready {
            return false;
        }
        if self.secondary_options.iter().any(|o| o.value == value) {
            self.secondary = Some(value);
            true
        } else {
            false
        }
    }
}
