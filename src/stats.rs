// src/stats.rs
//! Per-run counters and the human-readable diagnostics summary.
//!
//! Statistics are built fresh on every pipeline run and never persisted.
//! Invariant: `exported` equals `total` minus everything excluded along the
//! way (pinned, empty-URL, internal, Google search, duplicates), and equals
//! the number of lines in the exported text.

use crate::constants::SUMMARY_BULLET;

/// Counters accumulated during one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Tabs seen in the window snapshot, before any filtering.
    pub total: usize,
    /// Tabs dropped by the internal-page filter.
    pub skipped_internal: usize,
    /// Tabs dropped by the Google search filter.
    pub skipped_google: usize,
    /// Later repeats of an already-seen URL dropped by dedupe.
    pub duplicates_removed: usize,
    /// Lines in the exported text.
    pub exported: usize,
}

impl ExportStats {
    /// Renders the bullet-separated diagnostics summary.
    ///
    /// Field order is fixed; the skip and dedupe counters only appear when
    /// non-zero.
    pub fn summary(&self) -> String {
        let mut fields = vec![format!("Exported: {}", self.exported)];
        if self.skipped_internal > 0 {
            fields.push(format!("Skipped internal: {}", self.skipped_internal));
        }
        if self.skipped_google > 0 {
            fields.push(format!("Skipped Google search: {}", self.skipped_google));
        }
        if self.duplicates_removed > 0 {
            fields.push(format!("Duplicates removed: {}", self.duplicates_removed));
        }
        fields.push(format!("Total tabs seen: {}", self.total));
        fields.join(SUMMARY_BULLET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_omits_zero_counters() {
        let stats = ExportStats {
            total: 3,
            exported: 3,
            ..Default::default()
        };
        assert_eq!(stats.summary(), "Exported: 3 \u{2022} Total tabs seen: 3");
    }

    #[test]
    fn summary_field_order_is_fixed() {
        let stats = ExportStats {
            total: 10,
            skipped_internal: 2,
            skipped_google: 1,
            duplicates_removed: 3,
            exported: 4,
        };
        assert_eq!(
            stats.summary(),
            "Exported: 4 \u{2022} Skipped internal: 2 \u{2022} Skipped Google search: 1 \
             \u{2022} Duplicates removed: 3 \u{2022} Total tabs seen: 10"
        );
    }
}
