use super::*;
use crate::config::OpeningConfig;
use crate::search::RankedMove;
use chess_board::Position;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ranked_at(pos: &Position, value: f32) -> Vec<RankedMove> {
    pos.legal_moves()
        .into_iter()
        .map(|mv| RankedMove { mv, value })
        .collect()
}

#[test]
fn zero_base_chance_never_fires() {
    let randomizer = OpeningRandomizer::new(OpeningConfig {
        random_move_chance: 0.0,
        randomize_until: 10,
        ..OpeningConfig::default()
    });
    let pos = Position::startpos();
    let ranked = ranked_at(&pos, 0.0);

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(randomizer.maybe_randomize(&pos, &ranked, &mut rng), None);
    }
}

#[test]
fn zero_move_threshold_never_fires() {
    let randomizer = OpeningRandomizer::new(OpeningConfig {
        random_move_chance: 1.0,
        randomize_until: 0,
        ..OpeningConfig::default()
    });
    let pos = Position::startpos();
    let ranked = ranked_at(&pos, 0.0);

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(randomizer.maybe_randomize(&pos, &ranked, &mut rng), None);
    }
}

#[test]
fn certain_gate_picks_from_the_top_k() {
    let randomizer = OpeningRandomizer::new(OpeningConfig {
        random_move_chance: 1.0,
        randomize_until: 10,
        top_k: 3,
        decay_threshold: 4.0,
    });
    let pos = Position::startpos();
    // A dead-even best value keeps the decay scale at exactly 1.
    let ranked = ranked_at(&pos, 0.0);
    let top: Vec<_> = ranked.iter().take(3).map(|r| r.mv).collect();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mv = randomizer
            .maybe_randomize(&pos, &ranked, &mut rng)
            .expect("both draws must fire at chance 1.0");
        assert!(top.contains(&mv));
    }
}

#[test]
fn same_seed_gives_the_same_pick() {
    let randomizer = OpeningRandomizer::new(OpeningConfig {
        random_move_chance: 1.0,
        randomize_until: 10,
        top_k: 5,
        decay_threshold: 4.0,
    });
    let pos = Position::startpos();
    let ranked = ranked_at(&pos, 0.0);

    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    assert_eq!(
        randomizer.maybe_randomize(&pos, &ranked, &mut a),
        randomizer.maybe_randomize(&pos, &ranked, &mut b)
    );
}

#[test]
fn decisive_positions_suppress_randomization() {
    // |best| >= decay_threshold collapses the second draw to chance zero,
    // even with the base chance at 1.
    let randomizer = OpeningRandomizer::new(OpeningConfig {
        random_move_chance: 1.0,
        randomize_until: 10,
        top_k: 10,
        decay_threshold: 4.0,
    });
    let pos = Position::startpos();

    for value in [10_000.0, -10_000.0, 4.0, -4.0] {
        let ranked = ranked_at(&pos, value);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                randomizer.maybe_randomize(&pos, &ranked, &mut rng),
                None,
                "value {value} should never randomize"
            );
        }
    }
}

#[test]
fn top_k_is_clipped_to_the_ranking_length() {
    let randomizer = OpeningRandomizer::new(OpeningConfig {
        random_move_chance: 1.0,
        randomize_until: 10,
        top_k: 500,
        decay_threshold: 4.0,
    });
    let pos = Position::startpos();
    let ranked = ranked_at(&pos, 0.0);
    let all: Vec<_> = ranked.iter().map(|r| r.mv).collect();

    let mut rng = StdRng::seed_from_u64(7);
    let mv = randomizer.maybe_randomize(&pos, &ranked, &mut rng).unwrap();
    assert!(all.contains(&mv));
}

#[test]
fn empty_ranking_never_fires() {
    let randomizer = OpeningRandomizer::new(OpeningConfig {
        random_move_chance: 1.0,
        randomize_until: 10,
        ..OpeningConfig::default()
    });
    let pos = Position::startpos();

    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(randomizer.maybe_randomize(&pos, &[], &mut rng), None);
}
