//! Sales engine logic — pure functions, fully testable.
//!
//! The whole game is a reducer: `(SalesState, line tapped) -> SalesState`.
//! Nothing here does I/O or touches the DOM; the app shell owns a
//! [`SalesEngine`] and the render loop reads snapshots from it.

use crate::state::{Dessert, DessertLine, SalesState};

/// Select the active tier for `line` after `sold` cumulative sales.
///
/// Scans the ascending tier table and stops at the first tier whose
/// threshold exceeds `sold`; the tier before that point wins. The table
/// starts at threshold 0, so there is always a match.
pub fn active_dessert(line: DessertLine, sold: u64) -> &'static Dessert {
    let table = line.desserts();
    let mut active = &table[0];
    for tier in table {
        if tier.production_threshold <= sold {
            active = tier;
        } else {
            break;
        }
    }
    active
}

/// Apply one sale on `line` and return the next state.
///
/// The sold count increments, the line's revenue is recomputed in full from
/// the post-increment count and the now-active tier (so the unit price jumps
/// exactly at a threshold crossing), and both totals are recomputed as sums.
/// Arithmetic saturates at `u64::MAX`; counters never wrap or go backwards.
pub fn register_sale(state: &SalesState, line: DessertLine) -> SalesState {
    let mut next = state.clone();

    let sold = state.sold(line).saturating_add(1);
    let tier = active_dessert(line, sold);
    let revenue = sold.saturating_mul(tier.price);

    match line {
        DessertLine::A => {
            next.sold_a = sold;
            next.revenue_a = revenue;
            next.image_a = tier.image;
        }
        DessertLine::B => {
            next.sold_b = sold;
            next.revenue_b = revenue;
            next.image_b = tier.image;
        }
    }
    next.total_sold = next.sold_a.saturating_add(next.sold_b);
    next.total_revenue = next.revenue_a.saturating_add(next.revenue_b);
    next
}

/// Owns the screen's [`SalesState`] and applies transitions serially.
///
/// One engine per screen, owned by the app shell. The wasm main thread is
/// the only caller, so each `register_sale` is an indivisible transition as
/// far as any observer is concerned.
pub struct SalesEngine {
    state: SalesState,
}

impl SalesEngine {
    pub fn new() -> Self {
        Self {
            state: SalesState::new(),
        }
    }

    /// Register one sale on `line`, returning a view of the new state.
    pub fn register_sale(&mut self, line: DessertLine) -> &SalesState {
        self.state = register_sale(&self.state, line);
        &self.state
    }

    /// Snapshot of the current aggregate. Read-only; idempotent between
    /// sales.
    pub fn current_state(&self) -> SalesState {
        self.state.clone()
    }
}

impl Default for SalesEngine {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_line() -> impl Strategy<Value = DessertLine> {
        prop_oneof![Just(DessertLine::A), Just(DessertLine::B)]
    }

    proptest! {
        #[test]
        fn prop_totals_are_sums_after_every_event(
            events in prop::collection::vec(arb_line(), 0..200),
        ) {
            let mut engine = SalesEngine::new();
            for line in events {
                let s = engine.register_sale(line);
                prop_assert_eq!(s.total_sold, s.sold_a + s.sold_b);
                prop_assert_eq!(s.total_revenue, s.revenue_a + s.revenue_b);
            }
        }

        #[test]
        fn prop_counters_never_decrease(
            events in prop::collection::vec(arb_line(), 1..200),
        ) {
            let mut engine = SalesEngine::new();
            let mut prev = engine.current_state();
            for line in events {
                let s = engine.register_sale(line).clone();
                prop_assert!(s.sold_a >= prev.sold_a);
                prop_assert!(s.sold_b >= prev.sold_b);
                prop_assert!(s.revenue_a >= prev.revenue_a);
                prop_assert!(s.revenue_b >= prev.revenue_b);
                prop_assert!(s.total_sold > prev.total_sold);
                prev = s;
            }
        }

        #[test]
        fn prop_image_matches_sold_count(
            events in prop::collection::vec(arb_line(), 0..200),
        ) {
            let mut engine = SalesEngine::new();
            for line in events {
                engine.register_sale(line);
            }
            let s = engine.current_state();
            for line in DessertLine::all() {
                let tier = active_dessert(*line, s.sold(*line));
                prop_assert_eq!(s.image(*line), tier.image);
            }
        }

        #[test]
        fn prop_revenue_is_count_times_active_price(n in 0u64..500) {
            let mut engine = SalesEngine::new();
            for _ in 0..n {
                engine.register_sale(DessertLine::A);
            }
            let s = engine.current_state();
            let tier = active_dessert(DessertLine::A, n);
            prop_assert_eq!(s.revenue_a, n * tier.price);
        }

        #[test]
        fn prop_order_does_not_matter_across_lines(
            a in 0u64..100,
            b in 0u64..100,
            seed in any::<u64>(),
        ) {
            // Interleave a A-sales and b B-sales in a seed-derived order;
            // the final state must match firing them grouped.
            let mut engine = SalesEngine::new();
            let (mut ra, mut rb, mut bits) = (a, b, seed);
            while ra > 0 || rb > 0 {
                let pick_a = if ra == 0 {
                    false
                } else if rb == 0 {
                    true
                } else {
                    bits &= bits.rotate_left(1) | 1;
                    let choice = bits & 1 == 1;
                    bits = bits.rotate_right(3) ^ 0x9e37_79b9_7f4a_7c15;
                    choice
                };
                if pick_a {
                    engine.register_sale(DessertLine::A);
                    ra -= 1;
                } else {
                    engine.register_sale(DessertLine::B);
                    rb -= 1;
                }
            }

            let mut grouped = SalesEngine::new();
            for _ in 0..a {
                grouped.register_sale(DessertLine::A);
            }
            for _ in 0..b {
                grouped.register_sale(DessertLine::B);
            }
            prop_assert_eq!(engine.current_state(), grouped.current_state());
        }
    }
}
