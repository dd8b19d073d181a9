//! Pole-zero root sets and their edit history.
//!
//! `RootSet` is pure data: two ordered lists of complex roots with value
//! semantics and no rendering or controller state attached. `History`
//! implements linear undo/redo over whole-set snapshots; every mutating
//! operation in the designer records the pre-mutation state, so undo always
//! restores exactly what was visible before the edit.

use num_complex::Complex64;

/// Which root list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RootKind {
    /// Numerator root
    Zero,
    /// Denominator root
    Pole,
}

/// Ordered collections of zeros and poles
///
/// Ordering is insertion order. It matters only for closest-element removal
/// and undo consistency; the synthesized transfer function is independent of
/// it. Duplicate values are permitted and distinguished only by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootSet {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
}

impl RootSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.zeros.is_empty() && self.poles.is_empty()
    }

    /// Append a root to the list selected by `kind`
    ///
    /// When `add_conjugate` is set and the point is off the real axis, the
    /// complex conjugate is appended to the same list as well.
    pub fn add(&mut self, point: Complex64, kind: RootKind, add_conjugate: bool) {
        let list = match kind {
            RootKind::Zero => &mut self.zeros,
            RootKind::Pole => &mut self.poles,
        };
        list.push(point);
        if add_conjugate && point.im != 0.0 {
            list.push(point.conj());
        }
    }

    /// Remove the single element closest to `point`
    ///
    /// Distance is Euclidean over the union of both lists; ties go to the
    /// first element encountered in zeros-then-poles order. Exactly one
    /// occurrence of the winning value is removed, zeros checked before
    /// poles. Returns what was removed, or `None` when both lists are empty.
    pub fn remove_closest(&mut self, point: Complex64) -> Option<(RootKind, Complex64)> {
        let closest = self
            .zeros
            .iter()
            .chain(self.poles.iter())
            .copied()
            .min_by(|a, b| {
                (a - point)
                    .norm()
                    .partial_cmp(&(b - point).norm())
                    .expect("root distances are finite")
            })?;

        if let Some(idx) = self.zeros.iter().position(|z| *z == closest) {
            self.zeros.remove(idx);
            Some((RootKind::Zero, closest))
        } else {
            let idx = self
                .poles
                .iter()
                .position(|p| *p == closest)
                .expect("closest root must be in one of the lists");
            self.poles.remove(idx);
            Some((RootKind::Pole, closest))
        }
    }

    /// Exchange the zeros and poles lists wholesale
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.zeros, &mut self.poles);
    }

    pub fn clear_zeros(&mut self) {
        self.zeros.clear();
    }

    pub fn clear_poles(&mut self) {
        self.poles.clear();
    }

    pub fn clear_all(&mut self) {
        self.zeros.clear();
        self.poles.clear();
    }
}

/// Linear undo/redo over `RootSet` snapshots
///
/// `record` pushes a pre-mutation snapshot and invalidates redo; `undo`
/// moves the current state onto the redo stack and restores the last
/// snapshot; `redo` mirrors `undo`. Both stacks start empty.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<RootSet>,
    redo: Vec<RootSet>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state that existed before a mutation
    pub fn record(&mut self, before: RootSet) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Restore the most recent snapshot; no-op when nothing is recorded
    ///
    /// Returns whether a restore happened.
    pub fn undo(&mut self, current: &mut RootSet) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.redo.push(std::mem::replace(current, previous));
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone state; no-op when redo is empty
    pub fn redo(&mut self, current: &mut RootSet) -> bool {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(std::mem::replace(current, next));
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_add_with_conjugate() {
        let mut roots = RootSet::new();
        roots.add(c(0.5, 0.3), RootKind::Zero, true);
        assert_eq!(roots.zeros, vec![c(0.5, 0.3), c(0.5, -0.3)]);

        // Real-axis points never get a duplicate conjugate
        roots.add(c(-0.7, 0.0), RootKind::Pole, true);
        assert_eq!(roots.poles, vec![c(-0.7, 0.0)]);
    }

    #[test]
    fn test_remove_closest_prefers_nearest() {
        let mut roots = RootSet::new();
        roots.add(c(2.0, 0.0), RootKind::Zero, false);
        roots.add(c(0.0, 0.0), RootKind::Pole, false);

        let removed = roots.remove_closest(c(1.9, 0.0));
        assert_eq!(removed, Some((RootKind::Zero, c(2.0, 0.0))));
        assert!(roots.zeros.is_empty());
        assert_eq!(roots.poles.len(), 1);
    }

    #[test]
    fn test_remove_closest_tie_goes_to_zero() {
        let mut roots = RootSet::new();
        roots.add(c(1.0, 0.0), RootKind::Zero, false);
        roots.add(c(-1.0, 0.0), RootKind::Pole, false);

        // Equidistant from the origin; zeros win the tie
        let removed = roots.remove_closest(c(0.0, 0.0));
        assert_eq!(removed, Some((RootKind::Zero, c(1.0, 0.0))));
    }

    #[test]
    fn test_remove_closest_empty_is_noop() {
        let mut roots = RootSet::new();
        assert_eq!(roots.remove_closest(c(0.0, 0.0)), None);
    }

    #[test]
    fn test_remove_closest_duplicate_removes_one() {
        let mut roots = RootSet::new();
        roots.add(c(0.5, 0.0), RootKind::Zero, false);
        roots.add(c(0.5, 0.0), RootKind::Zero, false);
        roots.remove_closest(c(0.5, 0.0));
        assert_eq!(roots.zeros, vec![c(0.5, 0.0)]);
    }

    #[test]
    fn test_swap_twice_is_identity() {
        let mut roots = RootSet::new();
        roots.add(c(0.1, 0.2), RootKind::Zero, false);
        roots.add(c(0.3, -0.4), RootKind::Pole, false);
        let original = roots.clone();

        roots.swap();
        assert_eq!(roots.zeros, original.poles);
        assert_eq!(roots.poles, original.zeros);

        roots.swap();
        assert_eq!(roots, original);
    }

    #[test]
    fn test_undo_restores_pre_mutation_state() {
        let mut roots = RootSet::new();
        let mut history = History::new();

        let before = roots.clone();
        roots.add(c(0.5, 0.5), RootKind::Zero, false);
        history.record(before.clone());

        assert!(history.undo(&mut roots));
        assert_eq!(roots, before);
    }

    #[test]
    fn test_redo_restores_post_mutation_state() {
        let mut roots = RootSet::new();
        let mut history = History::new();

        let before = roots.clone();
        roots.add(c(0.5, 0.5), RootKind::Zero, false);
        history.record(before);
        let after = roots.clone();

        history.undo(&mut roots);
        assert!(history.redo(&mut roots));
        assert_eq!(roots, after);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut roots = RootSet::new();
        let mut history = History::new();

        let before = roots.clone();
        roots.add(c(0.5, 0.5), RootKind::Zero, false);
        history.record(before);

        history.undo(&mut roots);
        assert!(history.can_redo());

        let before = roots.clone();
        roots.add(c(-0.5, 0.0), RootKind::Pole, false);
        history.record(before);
        assert!(!history.can_redo());
        assert!(!history.redo(&mut roots));
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let mut roots = RootSet::new();
        roots.add(c(0.1, 0.0), RootKind::Zero, false);
        let mut history = History::new();

        let snapshot = roots.clone();
        assert!(!history.undo(&mut roots));
        assert_eq!(roots, snapshot);
    }
}
