// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dash pattern sequencing.

use crate::{Dashes, Stroke};

/// Budget slack when deciding that a dash entry is used up: half of one
/// fixed-point device unit ULP. Lengths below this cannot be represented on
/// the device grid.
const STEP_EPSILON: f64 = 1.0 / 512.0;

/// Position within a repeating on/off dash pattern.
///
/// The sequencer is a small state machine over pattern-entry indices paired
/// with an on/off flag. [`step`] advances it; the caller must never step
/// farther than [`remaining`] in a single call, so a transition always fires
/// when the current entry's budget is met, never by overshoot.
///
/// [`step`]: DashState::step
/// [`remaining`]: DashState::remaining
#[derive(Clone, Debug)]
pub struct DashState {
    dashes: Dashes,
    dashed: bool,
    ix: usize,
    on: bool,
    remain: f64,
    start_ix: usize,
    start_on: bool,
    start_remain: f64,
}

impl DashState {
    /// Build the sequencer for a stroke style.
    ///
    /// The style's dash offset is folded in here, once: the resulting phase
    /// is cached so that [`start`] can restore it at every subpath start.
    ///
    /// An empty pattern, or one whose total length is not positive, disables
    /// dashing.
    ///
    /// [`start`]: DashState::start
    pub fn new(style: &Stroke) -> DashState {
        let total: f64 = style.dash_pattern.iter().sum();
        let valid = !style.dash_pattern.is_empty()
            && style.dash_pattern.iter().all(|d| *d >= 0.0)
            && total.is_finite()
            && total > 0.0;
        if !valid {
            return DashState {
                dashes: Dashes::new(),
                dashed: false,
                ix: 0,
                on: true,
                remain: 0.0,
                start_ix: 0,
                start_on: true,
                start_remain: 0.0,
            };
        }

        let mut ix = 0;
        let mut on = true;
        let mut offset = style.dash_offset % total;
        if offset < 0.0 {
            offset += total;
        }
        while offset > 0.0 && offset >= style.dash_pattern[ix] {
            offset -= style.dash_pattern[ix];
            on = !on;
            ix = (ix + 1) % style.dash_pattern.len();
        }
        let remain = style.dash_pattern[ix] - offset;

        DashState {
            dashes: style.dash_pattern.clone(),
            dashed: true,
            ix,
            on,
            remain,
            start_ix: ix,
            start_on: on,
            start_remain: remain,
        }
    }

    /// Whether dashing is in effect at all.
    #[inline]
    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    /// Reset to the pattern's starting phase.
    ///
    /// Called at the beginning of every subpath.
    #[inline]
    pub fn start(&mut self) {
        self.ix = self.start_ix;
        self.on = self.start_on;
        self.remain = self.start_remain;
    }

    /// Whether the current phase is an "on" (drawn) interval.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Length left before the next on/off toggle.
    #[inline]
    pub fn remaining(&self) -> f64 {
        self.remain
    }

    /// Consume `length` from the current entry's budget.
    ///
    /// When the budget is used up, toggles the on/off phase and reloads from
    /// the next pattern entry, wrapping around at the end of the pattern.
    pub fn step(&mut self, length: f64) {
        self.remain -= length;
        if self.remain < STEP_EPSILON {
            self.ix += 1;
            if self.ix == self.dashes.len() {
                self.ix = 0;
            }
            self.on = !self.on;
            self.remain += self.dashes[self.ix];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stroke;

    fn dash_state(offset: f64, pattern: &[f64]) -> DashState {
        DashState::new(&Stroke::new(1.0).with_dashes(offset, pattern.iter().copied()))
    }

    #[test]
    fn undashed() {
        let dash = DashState::new(&Stroke::new(1.0));
        assert!(!dash.is_dashed());
        let zeros = dash_state(0.0, &[0.0, 0.0]);
        assert!(!zeros.is_dashed());
    }

    #[test]
    fn stepping() {
        let mut dash = dash_state(0.0, &[4.0, 2.0]);
        assert!(dash.is_dashed());
        assert!(dash.is_on());
        assert_eq!(dash.remaining(), 4.0);

        dash.step(4.0);
        assert!(!dash.is_on());
        assert_eq!(dash.remaining(), 2.0);

        dash.step(2.0);
        assert!(dash.is_on());
        assert_eq!(dash.remaining(), 4.0);
    }

    #[test]
    fn partial_steps() {
        let mut dash = dash_state(0.0, &[4.0, 2.0]);
        dash.step(1.0);
        dash.step(1.0);
        assert!(dash.is_on());
        assert_eq!(dash.remaining(), 2.0);
        dash.step(2.0);
        assert!(!dash.is_on());
    }

    #[test]
    fn offset_phase() {
        // An offset of 5 lands one unit into the "off" entry.
        let dash = dash_state(5.0, &[4.0, 2.0]);
        assert!(!dash.is_on());
        assert_eq!(dash.remaining(), 1.0);

        // An offset equal to the first entry starts the "off" entry exactly.
        let dash = dash_state(4.0, &[4.0, 2.0]);
        assert!(!dash.is_on());
        assert_eq!(dash.remaining(), 2.0);

        // Offsets wrap modulo the pattern length, including negative ones.
        let dash = dash_state(-1.0, &[4.0, 2.0]);
        assert!(!dash.is_on());
        assert_eq!(dash.remaining(), 1.0);
    }

    #[test]
    fn restart() {
        let mut dash = dash_state(5.0, &[4.0, 2.0]);
        dash.step(1.0);
        assert!(dash.is_on());
        dash.step(3.0);
        assert!(dash.is_on());
        assert_eq!(dash.remaining(), 1.0);
        dash.start();
        assert!(!dash.is_on());
        assert_eq!(dash.remaining(), 1.0);
    }
}
