//! The designer facade: serialized mutations over the root set, history,
//! prototype selection, and all-pass cascade.
//!
//! Every public operation runs to completion before the next is processed;
//! callers deliver one input event at a time. Mutating operations snapshot
//! the pre-mutation root set so undo/redo stays consistent with what was
//! visible when the edit arrived. Rendering collaborators only read derived
//! state (coordinate lists, coefficient pairs, response curves) through the
//! accessor methods; nothing here draws.

use crate::allpass::{self, AllPassLibrary, AllPassSection, CUSTOM_SECTION_NAME};
use crate::batch;
use crate::config::ZplaneConfig;
use crate::error::{Result, ZplaneError};
use crate::persist;
use crate::response::{self, FrequencyResponse};
use crate::rootset::{History, RootKind, RootSet};
use crate::synthesis::{self, Coefficients, FilterSource, Prototype};
use num_complex::Complex64;
use std::path::Path;

/// Point-event classification, already mapped from the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointAction {
    /// Add a root at the point (left click)
    Add,
    /// Remove the closest root (right click)
    Remove,
}

pub struct Designer {
    roots: RootSet,
    history: History,
    source: FilterSource,
    library: AllPassLibrary,
    cascade: Vec<AllPassSection>,
    cascade_enabled: bool,
    target: Option<RootKind>,
    add_conjugate: bool,
    config: ZplaneConfig,
}

impl Designer {
    pub fn new(config: ZplaneConfig) -> Self {
        Self {
            roots: RootSet::new(),
            history: History::new(),
            source: FilterSource::None,
            library: AllPassLibrary::new(),
            cascade: Vec::new(),
            cascade_enabled: false,
            target: None,
            add_conjugate: false,
            config,
        }
    }

    // ---- Mode selections ------------------------------------------------

    /// Choose which root list subsequent adds target
    pub fn set_target(&mut self, target: Option<RootKind>) {
        self.target = target;
    }

    /// Toggle automatic conjugate insertion for off-axis points
    pub fn set_add_conjugate(&mut self, enabled: bool) {
        self.add_conjugate = enabled;
    }

    /// Toggle whether the selected all-pass cascade participates
    pub fn set_cascade_enabled(&mut self, enabled: bool) {
        self.cascade_enabled = enabled;
    }

    pub fn cascade_enabled(&self) -> bool {
        self.cascade_enabled
    }

    // ---- Editing --------------------------------------------------------

    /// Handle a classified z-plane point event
    ///
    /// Points farther than the placement limit from the origin are ignored,
    /// mirroring the interactive surface this core was designed for.
    pub fn point_event(&mut self, x: f64, y: f64, action: PointAction) {
        if (x * x + y * y).sqrt() > self.config.designer.placement_limit {
            return;
        }
        let point = Complex64::new(x, y);
        match action {
            PointAction::Add => self.add_root(point),
            PointAction::Remove => self.remove_closest(point),
        }
    }

    /// Append a root at `point` to the targeted list
    ///
    /// Silently ignored when no target is selected; that is a UI state, not
    /// an error.
    pub fn add_root(&mut self, point: Complex64) {
        let Some(kind) = self.target else {
            log::debug!("add ignored: no zero/pole target selected");
            return;
        };
        let before = self.roots.clone();
        self.roots.add(point, kind, self.add_conjugate);
        self.commit(before);
    }

    /// Remove the root closest to `point`; no-op on an empty root set
    pub fn remove_closest(&mut self, point: Complex64) {
        if self.roots.is_empty() {
            return;
        }
        let before = self.roots.clone();
        self.roots.remove_closest(point);
        self.commit(before);
    }

    /// Exchange the zeros and poles lists
    pub fn swap(&mut self) {
        let before = self.roots.clone();
        self.roots.swap();
        self.commit(before);
    }

    pub fn clear_zeros(&mut self) {
        let before = self.roots.clone();
        self.roots.clear_zeros();
        self.commit(before);
    }

    pub fn clear_poles(&mut self) {
        let before = self.roots.clone();
        self.roots.clear_poles();
        self.commit(before);
    }

    pub fn clear_all(&mut self) {
        let before = self.roots.clone();
        self.roots.clear_all();
        self.commit(before);
    }

    /// Restore the state before the last edit; no-op with empty history
    pub fn undo(&mut self) {
        if self.history.undo(&mut self.roots) {
            self.demote_prototype();
        }
    }

    /// Reapply the last undone edit; no-op with empty redo stack
    pub fn redo(&mut self) {
        if self.history.redo(&mut self.roots) {
            self.demote_prototype();
        }
    }

    fn commit(&mut self, before: RootSet) {
        self.history.record(before);
        // Once the user edits roots by hand, the placed roots drive the
        // transfer function, not a previously selected prototype.
        self.source = FilterSource::Manual;
    }

    fn demote_prototype(&mut self) {
        if matches!(self.source, FilterSource::Prototype(_)) {
            self.source = FilterSource::Manual;
        }
    }

    // ---- Prototype selection -------------------------------------------

    /// Replace the root set with a library prototype's roots
    ///
    /// `None` selects "no filter": the root set is cleared and synthesis
    /// returns the identity. Either way the previous state is recorded for
    /// undo.
    pub fn select_prototype(&mut self, prototype: Option<Prototype>) -> Result<()> {
        let before = self.roots.clone();
        match prototype {
            Some(p) => {
                let roots = p.roots_of(&self.config.prototype)?;
                self.roots = roots;
                self.history.record(before);
                self.source = FilterSource::Prototype(p);
                log::info!("selected prototype {p}");
            }
            None => {
                self.roots.clear_all();
                self.history.record(before);
                self.source = FilterSource::None;
                log::info!("cleared prototype selection");
            }
        }
        Ok(())
    }

    pub fn source(&self) -> FilterSource {
        self.source
    }

    // ---- All-pass cascade ----------------------------------------------

    /// Replace the active cascade selection with the named library sections
    ///
    /// Selecting sections also enables the cascade, matching the
    /// interactive flow this core serves.
    pub fn select_sections(&mut self, names: &[&str]) -> Result<()> {
        let mut selection = Vec::with_capacity(names.len());
        for name in names {
            let section = self
                .library
                .get(name)
                .ok_or_else(|| ZplaneError::UnknownSection(name.to_string()))?;
            selection.push(section.clone());
        }
        self.cascade = selection;
        self.cascade_enabled = true;
        Ok(())
    }

    /// Build a one-section cascade from comma-separated real zero values
    ///
    /// The whole input is rejected on any bad token. The section replaces
    /// the active selection and is registered in the library under the
    /// reserved name for reuse.
    pub fn add_arbitrary_section(&mut self, text: &str) -> Result<()> {
        let zeros = allpass::parse_zero_list(text)?;
        let section = AllPassSection::from_zeros(zeros)?;
        self.library.register(CUSTOM_SECTION_NAME, section.clone());
        self.cascade = vec![section];
        self.cascade_enabled = true;
        Ok(())
    }

    pub fn allpass_library(&self) -> &AllPassLibrary {
        &self.library
    }

    // ---- Derived state (read interfaces) -------------------------------

    pub fn root_set(&self) -> &RootSet {
        &self.roots
    }

    /// Root lists with the active cascade merged in, for scatter display
    pub fn combined_roots(&self) -> (Vec<Complex64>, Vec<Complex64>) {
        synthesis::combined_roots(&self.roots, self.active_cascade())
    }

    /// Current transfer-function coefficients, highest power first
    pub fn coefficients(&self) -> Result<Coefficients> {
        synthesis::synthesize(
            self.source,
            &self.roots,
            self.active_cascade(),
            &self.config.prototype,
        )
    }

    /// Coefficients with the leading denominator coefficient scaled to 1,
    /// as consumed by the realization-diagram collaborator
    pub fn normalized_coefficients(&self) -> Result<Coefficients> {
        Ok(self.coefficients()?.normalized())
    }

    /// Real coefficient pair for collaborators that expect real values
    pub fn real_coefficients(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        Ok(self.coefficients()?.real())
    }

    /// Magnitude and phase curves over the configured frequency grid
    ///
    /// An empty root set yields empty curves for the caller to render as
    /// nothing; this is the documented special case, not an approximation.
    pub fn response(&self) -> Result<FrequencyResponse> {
        if self.roots.is_empty() {
            return Ok(FrequencyResponse::empty());
        }
        let coeffs = self.coefficients()?;
        Ok(response::freqz(
            &coeffs.b,
            &coeffs.a,
            self.config.designer.response_points,
        ))
    }

    /// Filter a whole sample buffer through the current coefficients
    pub fn filter_samples(&self, samples: &[f64]) -> Result<Vec<f64>> {
        let coeffs = self.coefficients()?;
        batch::filter(&coeffs.b, &coeffs.a, samples)
    }

    fn active_cascade(&self) -> &[AllPassSection] {
        if self.cascade_enabled {
            &self.cascade
        } else {
            &[]
        }
    }

    // ---- Persistence ----------------------------------------------------

    pub fn save_to(&self, path: &Path) -> Result<()> {
        persist::save(path, &self.roots)
    }

    /// Replace the root set from a filter file, recording a snapshot
    ///
    /// A load failure leaves the designer untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        let loaded = persist::load(path)?;
        let before = self.roots.clone();
        self.roots = loaded;
        self.commit(before);
        Ok(())
    }
}

impl Default for Designer {
    fn default() -> Self {
        Self::new(ZplaneConfig::default())
    }
}
