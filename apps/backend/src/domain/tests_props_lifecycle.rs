//! Property tests for lifecycle monotonicity.

use proptest::prelude::*;

use crate::domain::lifecycle;
use crate::domain::state::{Game, GameStatus};
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::{at, waiting_game, HOST};

#[derive(Debug, Clone)]
enum Step {
    Start { by_host: bool },
    Finish,
    Request { target: GameStatus, by_host: bool },
}

fn step() -> impl Strategy<Value = Step> {
    let status = prop_oneof![
        Just(GameStatus::Waiting),
        Just(GameStatus::Playing),
        Just(GameStatus::Finished),
    ];
    prop_oneof![
        any::<bool>().prop_map(|by_host| Step::Start { by_host }),
        Just(Step::Finish),
        (status, any::<bool>()).prop_map(|(target, by_host)| Step::Request { target, by_host }),
    ]
}

fn rank(status: GameStatus) -> u8 {
    match status {
        GameStatus::Waiting => 0,
        GameStatus::Playing => 1,
        GameStatus::Finished => 2,
    }
}

fn apply(game: &mut Game, step: &Step, now: i64) {
    let actor = |by_host: bool| if by_host { HOST } else { "alice" };
    let _ = match step {
        Step::Start { by_host } => lifecycle::start(game, actor(*by_host), at(now)),
        Step::Finish => lifecycle::finish(game, at(now)),
        Step::Request { target, by_host } => {
            lifecycle::transition(game, actor(*by_host), *target, at(now))
        }
    };
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: status never regresses and each timestamp is written at most once.
    #[test]
    fn prop_lifecycle_monotonic(steps in prop::collection::vec(step(), 0..20)) {
        let mut game = waiting_game("PLANE", &["alice"]);
        let mut started = None;
        let mut ended = None;

        for (i, s) in steps.iter().enumerate() {
            let before = game.status();
            apply(&mut game, s, i as i64 + 1);
            prop_assert!(rank(game.status()) >= rank(before));

            if let Some(t) = started {
                prop_assert_eq!(game.started_at(), Some(t));
            }
            if let Some(t) = ended {
                prop_assert_eq!(game.ended_at(), Some(t));
            }
            started = game.started_at();
            ended = game.ended_at();

            prop_assert_eq!(game.started_at().is_some(), game.status() != GameStatus::Waiting);
            prop_assert_eq!(game.ended_at().is_some(), game.status() == GameStatus::Finished);
        }
    }
}
