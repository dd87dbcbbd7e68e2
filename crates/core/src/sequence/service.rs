//! Line numbering rules.

use crate::sequence::types::{LineModel, OrderLine};

/// Stateless service assigning "#" numbers to document lines.
pub struct SequenceService;

impl SequenceService {
    /// Number for a line appended to `siblings`: highest existing number plus one.
    #[must_use]
    pub fn next_sequence_number(siblings: &[OrderLine]) -> u32 {
        siblings
            .iter()
            .map(|line| line.sequence_number)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    /// Number for a line being created.
    ///
    /// Lines created without a parent document get no number from here and
    /// keep whatever default the host assigns.
    #[must_use]
    pub fn number_new_line(
        model: LineModel,
        has_parent: bool,
        siblings: &[OrderLine],
    ) -> Option<u32> {
        if !has_parent {
            tracing::debug!(
                model = %model,
                parent_field = model.parent_field(),
                "line created without parent, leaving number unassigned"
            );
            return None;
        }
        Some(Self::next_sequence_number(siblings))
    }

    /// Sorts lines for display: by number, then by id.
    pub fn display_order(lines: &mut [OrderLine]) {
        lines.sort_by(|a, b| {
            a.sequence_number
                .cmp(&b.sequence_number)
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    /// Renumbers `1..=n` in handle order when any line is unnumbered.
    ///
    /// Lines keep their slice position; only `sequence_number` changes.
    /// Returns how many numbers changed.
    pub fn cleanup(model: LineModel, lines: &mut [OrderLine]) -> usize {
        if Self::is_cleanup_done(lines) {
            return 0;
        }

        let mut order: Vec<usize> = (0..lines.len()).collect();
        order.sort_by(|&a, &b| {
            lines[a]
                .sequence
                .cmp(&lines[b].sequence)
                .then_with(|| lines[a].id.cmp(&lines[b].id))
        });

        let mut changed = 0;
        for (number, &index) in (1u32..).zip(order.iter()) {
            if lines[index].sequence_number != number {
                lines[index].sequence_number = number;
                changed += 1;
            }
        }

        tracing::debug!(model = %model, lines = lines.len(), changed, "renumbered lines");
        changed
    }

    /// Returns true if every line has a number.
    #[must_use]
    pub fn is_cleanup_done(lines: &[OrderLine]) -> bool {
        lines.iter().all(|line| !line.is_unnumbered())
    }
}
