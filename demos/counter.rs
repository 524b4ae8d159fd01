//! Counter Cascade
//!
//! This example walks one action through all three registries.
//!
//! Key concepts:
//! - Transitions fold the payload into the state
//! - Triggers dispatch follow-ups before `dispatch` returns
//! - Effect results wait for a later turn
//!
//! Run with: cargo run --example counter

use cascade_store::action_enum;
use cascade_store::core::{Transitions, Triggers};
use cascade_store::effects::Effects;
use cascade_store::{StoreBuilder, StoreConfig};

action_enum! {
    enum Counter: CounterKind {
        Increment(i64),
        Reset,
        Announce,
    }
}

#[derive(Clone, Debug, Default)]
struct Count {
    value: i64,
    resets: u32,
}

#[tokio::main]
async fn main() {
    println!("=== Counter Cascade ===\n");

    let transitions = Transitions::new()
        .on(CounterKind::Increment, |s: Count, a: &Counter| match a {
            Counter::Increment(n) => Count {
                value: s.value + n,
                ..s
            },
            _ => s,
        })
        .on(CounterKind::Reset, |s: Count, _: &Counter| Count {
            value: 0,
            resets: s.resets + 1,
        });

    // wrap around at ten
    let triggers = Triggers::new().on(CounterKind::Increment, |s: &Count, _: &Counter| {
        (s.value >= 10).then_some(Counter::Reset)
    });

    let effects: Effects<Count, Counter> = Effects::new()
        .on(CounterKind::Reset, |s: &Count, _: &Counter| {
            println!("  effect: saw reset #{}", s.resets);
            Some(Counter::Announce)
        })
        .on(CounterKind::Announce, |s: &Count, _: &Counter| {
            println!("  effect: announcing value {}", s.value);
        });

    let mut store = StoreBuilder::new()
        .initial(Count::default())
        .transitions(transitions)
        .effects(effects)
        .triggers(triggers)
        .config(StoreConfig::new().record_history(true))
        .build()
        .unwrap();

    for step in [4, 4, 4] {
        store.dispatch(Counter::Increment(step)).unwrap();
        println!(
            "Increment({step}) -> value {}, resets {}, pending {}",
            store.state().value,
            store.state().resets,
            store.pending()
        );
    }

    println!("\nSettling scheduled effects:");
    let turns = store.settle(&()).await.unwrap();
    println!("Settled in {turns} turn(s)\n");

    println!("History:");
    for record in store.history().records() {
        println!("  {:indent$}{} ({:?})", "", record.name, record.origin, indent = record.depth * 2);
    }

    println!("\n=== Example Complete ===");
}
