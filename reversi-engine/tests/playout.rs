use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use reversi_engine::{Game, NUM_SPACES};

/// Play uniformly random legal moves from the starting position until the game ends.
/// Returns the number of occupied cells after every accepted placement, starting
/// with the opening position.
fn random_playout<R: Rng + ?Sized>(rng: &mut R) -> Vec<usize> {
    let mut game = Game::default();
    let mut occupancy = vec![game.board().occupied()];

    while !game.is_finished() {
        match game.legal_moves().choose(rng) {
            Some(mv) => {
                let (row, column) = mv.to_coords();
                game.play(row, column).unwrap();
                occupancy.push(game.board().occupied());
            }
            None => game.pass().unwrap(),
        }
    }

    occupancy
}

#[test]
fn playout_reaches_the_end() {
    let mut rng = StdRng::seed_from_u64(7);
    let occupancy = random_playout(&mut rng);
    assert_eq!(occupancy[0], 4);
    assert!(occupancy.len() > 1);
    assert!(*occupancy.last().unwrap() <= NUM_SPACES);
}

#[test]
fn occupancy_grows_by_one_per_placement() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let occupancy = random_playout(&mut rng);

        assert_eq!(occupancy[0], 4);
        for pair in occupancy.windows(2) {
            assert_eq!(pair[1], pair[0] + 1, "seed {}", seed);
        }
    }
}
