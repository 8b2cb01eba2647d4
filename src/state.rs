//! Wheel State - Single Source of Truth
//!
//! Owns the slot list, selection history, and cumulative rotation. All
//! mutations go through the operations here; the GUI controller composes
//! them with the spin resolver and the store.

use serde::{Deserialize, Serialize};

use crate::spin::SpinOutcome;

/// One committed selection. `was_removed` records whether the winning slot
/// left the wheel as a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub item: String,
    #[serde(rename = "wasRemoved")]
    pub was_removed: bool,
}

/// Full wheel state for one session.
#[derive(Debug, Clone, Default)]
pub struct WheelState {
    pub items: Vec<String>,
    pub history: Vec<SelectionRecord>,
    /// Cumulative rotation in degrees. Only ever grows across spins, so the
    /// wheel always animates forward.
    pub rotation: f64,
    pub spinning: bool,
}

impl WheelState {
    pub fn new(items: Vec<String>, history: Vec<SelectionRecord>) -> Self {
        Self {
            items,
            history,
            rotation: 0.0,
            spinning: false,
        }
    }

    /// A spin needs at least two slots and no spin in flight.
    pub fn can_spin(&self) -> bool {
        !self.spinning && self.items.len() >= 2
    }

    /// Append parsed slots from the entry box.
    pub fn add_slots(&mut self, slots: Vec<String>) {
        if slots.is_empty() {
            return;
        }
        tracing::debug!("Adding {} slot(s)", slots.len());
        self.items.extend(slots);
    }

    /// Restore the default catalog and wipe the history.
    pub fn reset(&mut self, defaults: &[String]) {
        tracing::info!("Reset to {} default slot(s)", defaults.len());
        self.items = defaults.to_vec();
        self.history.clear();
    }

    /// Empty the wheel and the history.
    pub fn clear_all(&mut self) {
        tracing::info!("Cleared wheel and history");
        self.items.clear();
        self.history.clear();
    }

    /// Commit a resolved spin: rotation jumps to its landing value and the
    /// spinning gate closes until reconciliation.
    pub fn begin_spin(&mut self, outcome: &SpinOutcome) {
        self.rotation = outcome.new_rotation;
        self.spinning = true;
    }

    /// Record the winner and optionally drop its slot. Runs once per resolved
    /// spin, after the animation; the spinning gate reopens here.
    pub fn reconcile(&mut self, winner_index: usize, keep_on_wheel: bool) {
        self.spinning = false;

        let Some(label) = self.items.get(winner_index).cloned() else {
            tracing::warn!("Reconcile with stale winner index {}", winner_index);
            return;
        };

        tracing::info!("Winner: {} (kept on wheel: {})", label, keep_on_wheel);
        self.history.push(SelectionRecord {
            item: label,
            was_removed: !keep_on_wheel,
        });

        if !keep_on_wheel {
            // Remove the exact winning slot, not the first matching label, so
            // duplicates elsewhere keep their positions.
            self.items.remove(winner_index);
        }
    }
}
