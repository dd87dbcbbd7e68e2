//! Property-based tests for SequenceService.

use proptest::prelude::*;
use uuid::Uuid;

use crate::sequence::service::SequenceService;
use crate::sequence::types::{LineModel, OrderLine};
use erpvn_shared::types::LineId;

/// Strategy for a batch of lines with distinct ids, some unnumbered.
fn arb_lines() -> impl Strategy<Value = Vec<OrderLine>> {
    prop::collection::vec((-50i32..50, 0u32..20), 0..30).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (sequence, number))| {
                OrderLine::new(
                    LineId::from_uuid(Uuid::from_u128(i as u128 + 1)),
                    sequence,
                    number,
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A new line is numbered above every sibling.
    #[test]
    fn prop_next_exceeds_all(lines in arb_lines()) {
        let next = SequenceService::next_sequence_number(&lines);
        prop_assert!(lines.iter().all(|l| l.sequence_number < next));
    }

    /// After cleanup with any unnumbered line, numbers are exactly 1..=n.
    #[test]
    fn prop_cleanup_yields_permutation(mut lines in arb_lines()) {
        let had_gap = !SequenceService::is_cleanup_done(&lines);
        SequenceService::cleanup(LineModel::SaleOrderLine, &mut lines);

        prop_assert!(SequenceService::is_cleanup_done(&lines));
        if had_gap {
            let mut numbers: Vec<u32> = lines.iter().map(|l| l.sequence_number).collect();
            numbers.sort_unstable();
            let expected: Vec<u32> = (1..=lines.len() as u32).collect();
            prop_assert_eq!(numbers, expected);
        }
    }

    /// Cleanup is idempotent.
    #[test]
    fn prop_cleanup_idempotent(mut lines in arb_lines()) {
        SequenceService::cleanup(LineModel::PurchaseRequestLine, &mut lines);
        let snapshot = lines.clone();
        prop_assert_eq!(SequenceService::cleanup(LineModel::PurchaseRequestLine, &mut lines), 0);
        prop_assert_eq!(lines, snapshot);
    }

    /// Display order is sorted by (number, id).
    #[test]
    fn prop_display_order_sorted(mut lines in arb_lines()) {
        SequenceService::display_order(&mut lines);
        for pair in lines.windows(2) {
            prop_assert!((pair[0].sequence_number, pair[0].id) <= (pair[1].sequence_number, pair[1].id));
        }
    }
}
