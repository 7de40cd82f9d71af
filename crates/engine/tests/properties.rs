use proptest::prelude::*;
use split_engine::{
    EngineState, LineItem, Money, ROUNDING_UNIT, Receipt, Roster, SelectionSet, SplitEngine,
};

/// Receipts with 1..4 items each, prices small enough to never overflow.
fn receipts_strategy() -> impl Strategy<Value = Vec<Receipt>> {
    prop::collection::vec(
        prop::collection::vec((0u64..200_000, 0u64..5), 1..4),
        1..4,
    )
    .prop_map(|receipts| {
        receipts
            .into_iter()
            .enumerate()
            .map(|(r, items)| {
                let items = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, (price, quantity))| {
                        LineItem::new(format!("item{i}"), Money::new(price), quantity)
                    })
                    .collect();
                Receipt::new(format!("place{r}"), items)
            })
            .collect()
    })
}

/// Non-empty bearer sets over `person_count` participants, one per item.
fn selections(person_count: usize, items: usize) -> impl Strategy<Value = Vec<SelectionSet>> {
    let one = (prop::collection::vec(any::<bool>(), person_count), 0..person_count).prop_map(
        |(mask, fallback)| {
            let mut selection: SelectionSet = mask
                .into_iter()
                .enumerate()
                .filter_map(|(index, picked)| picked.then_some(index))
                .collect();
            if selection.is_empty() {
                selection.insert(fallback);
            }
            selection
        },
    );
    prop::collection::vec(one, items)
}

fn session() -> impl Strategy<Value = (usize, Vec<Receipt>, Vec<SelectionSet>)> {
    (2usize..=8, receipts_strategy()).prop_flat_map(|(person_count, receipts)| {
        let items = receipts.iter().map(|r| r.items.len()).sum();
        (
            Just(person_count),
            Just(receipts),
            selections(person_count, items),
        )
    })
}

fn engine(person_count: usize, receipts: Vec<Receipt>) -> SplitEngine {
    SplitEngine::builder()
        .roster(Roster::new(person_count).unwrap())
        .receipts(receipts)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn share_is_rounded_and_never_undercollects(price in 0u64..10_000_000, bearers in 1usize..=8) {
        let share = Money::new(price).split_share(bearers).unwrap().units();
        let n = bearers as u64;
        prop_assert_eq!(share % ROUNDING_UNIT, 0);
        prop_assert!(share * n >= price);
        prop_assert!(share >= price.div_ceil(n));
        // Never more than one rounding step above the even fraction.
        prop_assert!(share < price.div_ceil(n) + ROUNDING_UNIT);
    }

    #[test]
    fn every_split_collects_at_least_the_line_total((person_count, receipts, picks) in session()) {
        let mut engine = engine(person_count, receipts);
        for selection in &picks {
            let item = engine.current_item().unwrap();
            engine.confirm_split(selection).unwrap();
            let collected = selection
                .iter()
                .map(|p| {
                    engine
                        .allocation_snapshot()
                        .get(p, &item.place_name, &item.product_name)
                        .unwrap()
                        .units()
                })
                .sum::<u64>();
            prop_assert!(collected >= item.line_total.units());
        }
    }

    #[test]
    fn cursor_strictly_increases_until_complete((person_count, receipts, picks) in session()) {
        let mut engine = engine(person_count, receipts);
        let mut previous = engine.cursor();
        let last = picks.len() - 1;
        for (step, selection) in picks.iter().enumerate() {
            prop_assert!(!engine.is_complete());
            match engine.confirm_split(selection).unwrap() {
                EngineState::Active(cursor) => {
                    prop_assert!(step < last);
                    prop_assert!(cursor > previous);
                    previous = cursor;
                }
                EngineState::Complete => {
                    prop_assert_eq!(step, last);
                }
            }
        }
        prop_assert!(engine.is_complete());
    }

    #[test]
    fn rollback_undoes_the_last_split((person_count, receipts, picks) in session(), cut in any::<prop::sample::Index>()) {
        let mut engine = engine(person_count, receipts);
        let stop = cut.index(picks.len());
        for selection in &picks[..stop] {
            engine.confirm_split(selection).unwrap();
        }
        let table = engine.allocation_snapshot().clone();
        let state = engine.state();

        engine.confirm_split(&picks[stop]).unwrap();
        prop_assert_eq!(engine.rollback(), state);
        prop_assert_eq!(engine.allocation_snapshot(), &table);
    }
}
