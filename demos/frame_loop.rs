//! Frame Loop
//!
//! This example drives an animation loop with deferred effects while
//! input keeps arriving.
//!
//! Key concepts:
//! - Deferred effects built with stillwater's `from_async`
//! - `Store::tick` inside `tokio::select!` alongside an input source
//! - Cancelled turns lose no scheduled work
//!
//! Run with: cargo run --example frame_loop

use cascade_store::action_enum;
use cascade_store::core::{Transitions, Triggers};
use cascade_store::effects::{EffectError, Effects, Reaction};
use cascade_store::StoreBuilder;
use std::time::Duration;
use stillwater::prelude::*;

action_enum! {
    enum Game: GameKind {
        Key(char),
        FrameRequest,
        Frame(u64),
    }
}

#[derive(Clone, Debug, Default)]
struct World {
    paddle: i32,
    frames: u64,
    running: bool,
}

const FRAME: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() {
    println!("=== Frame Loop ===\n");

    let transitions = Transitions::new()
        .on(GameKind::Key, |mut w: World, a: &Game| {
            match a {
                Game::Key('<') => w.paddle -= 1,
                Game::Key('>') => w.paddle += 1,
                Game::Key('q') => w.running = false,
                Game::Key(' ') => w.running = true,
                _ => {}
            }
            w
        })
        .on(GameKind::Frame, |mut w: World, _: &Game| {
            w.frames += 1;
            w
        });

    let triggers = Triggers::new()
        .on(GameKind::Key, |w: &World, a: &Game| {
            matches!(a, Game::Key(' ')).then_some(Game::FrameRequest).filter(|_| w.running)
        })
        .on(GameKind::Frame, |w: &World, _: &Game| w.running.then_some(Game::FrameRequest));

    let effects: Effects<World, Game> = Effects::new().on(GameKind::FrameRequest, |_: &World, _: &Game| {
        Reaction::Deferred(
            from_async(|_: &()| async {
                tokio::time::sleep(FRAME).await;
                Ok::<_, EffectError>(Some(Game::Frame(FRAME.as_millis() as u64)))
            })
            .boxed(),
        )
    });

    let mut store = StoreBuilder::new()
        .initial(World::default())
        .transitions(transitions)
        .effects(effects)
        .triggers(triggers)
        .build()
        .unwrap();

    store.dispatch(Game::Key(' ')).unwrap();

    let mut input = "<<>>><<<q".chars();
    let mut keys = tokio::time::interval(Duration::from_millis(25));

    while !store.is_idle() {
        tokio::select! {
            turn = store.tick(&()) => {
                turn.unwrap();
            }
            _ = keys.tick() => {
                if let Some(key) = input.next() {
                    store.dispatch(Game::Key(key)).unwrap();
                    println!(
                        "key {key:?}: paddle at {}, {} frame(s) drawn",
                        store.state().paddle,
                        store.state().frames
                    );
                }
            }
        }
    }

    println!("\nLoop stopped after {} frame(s)", store.state().frames);
    println!("\n=== Example Complete ===");
}
