use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::game::Game;
use crate::table::{FaceCountTable, Grouping, OutcomeCountTable, WideTable};

/// Statistics over the history of a played [`Game`].
///
/// The analyzer borrows the game, so the history cannot change underneath
/// it. Play again and build a new analyzer to study a new history.
#[derive(Debug)]
pub struct Analyzer<'a, G = ThreadRng>
where
    G: RngCore,
{
    game: &'a Game<G>,
    results: &'a WideTable,
}

impl<'a, G> Analyzer<'a, G>
where
    G: RngCore,
{
    pub fn new(game: &'a Game<G>) -> Result<Self> {
        let results = game
            .history()
            .filter(|h| !h.is_empty())
            .ok_or(Error::NotPlayed)?;
        Ok(Self { game, results })
    }

    #[must_use]
    pub fn game(&self) -> &'a Game<G> {
        self.game
    }

    /// Wide history the statistics are computed from.
    #[must_use]
    pub fn results(&self) -> &'a WideTable {
        self.results
    }

    /// Number of rolls where every die shows the same face.
    #[must_use]
    pub fn jackpot(&self) -> usize {
        self.jackpot_rolls().len()
    }

    /// Indices of the jackpot rolls, ascending.
    #[must_use]
    pub fn jackpot_rolls(&self) -> Vec<usize> {
        let rolls = self
            .results
            .rows()
            .iter()
            .positions(|r| r.iter().all_equal())
            .collect_vec();
        tracing::trace!(jackpots = rolls.len(), rolls = self.results.num_rolls());
        rolls
    }

    #[must_use]
    pub fn face_counts_per_roll(&self) -> FaceCountTable {
        let faces = self.game.faces();
        let counts = self
            .results
            .rows()
            .iter()
            .map(|r| {
                let seen = r.iter().counts();
                faces
                    .iter()
                    .map(|f| seen.get(f).copied().unwrap_or(0))
                    .collect()
            })
            .collect();
        FaceCountTable::new(faces, counts)
    }

    /// Rolls grouped by their sorted outcomes.
    #[must_use]
    pub fn combo_count(&self) -> OutcomeCountTable {
        self.group(Grouping::Combination)
    }

    /// Rolls grouped by their outcomes in die order.
    #[must_use]
    pub fn permutation_count(&self) -> OutcomeCountTable {
        self.group(Grouping::Permutation)
    }

    fn group(&self, grouping: Grouping) -> OutcomeCountTable {
        let counts = self
            .results
            .rows()
            .iter()
            .map(|r| match grouping {
                Grouping::Combination => r.iter().cloned().sorted().collect_vec(),
                Grouping::Permutation => r.clone(),
            })
            .counts();
        tracing::trace!(?grouping, distinct = counts.len());
        OutcomeCountTable::new(grouping, counts.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::face::Face;
    use crate::Die;

    fn game_of(dice: &[&Die], rolls: usize) -> Game<ChaCha8Rng> {
        let mut game =
            Game::with_rng(dice.iter().copied(), ChaCha8Rng::seed_from_u64(3)).unwrap();
        game.play(rolls).unwrap();
        game
    }

    fn ints(values: &[i64]) -> Vec<Face> {
        values.iter().copied().map(Face::Int).collect()
    }

    #[test]
    fn unplayed_game_is_rejected() {
        let die = Die::numeric(6).unwrap();
        let game = Game::new([&die]).unwrap();
        assert_eq!(Analyzer::new(&game).unwrap_err(), Error::NotPlayed);
    }

    #[test]
    fn reads_the_game_history() {
        let die = Die::numeric(4).unwrap();
        let game = game_of(&[&die, &die], 6);
        let analyzer = Analyzer::new(&game).unwrap();
        assert!(std::ptr::eq(analyzer.game(), &game));
        assert_eq!(Some(analyzer.results()), game.history());
        assert_eq!(analyzer.results().num_rolls(), 6);
    }

    #[test]
    fn single_die_always_hits_jackpot() {
        let die = Die::numeric(6).unwrap();
        let game = game_of(&[&die], 40);
        let analyzer = Analyzer::new(&game).unwrap();
        assert_eq!(analyzer.jackpot(), 40);
        assert_eq!(analyzer.jackpot_rolls(), (0..40).collect_vec());
    }

    #[test]
    fn forced_dice_always_hit_jackpot() {
        let a = Die::numeric(3).unwrap();
        let b = Die::numeric(3).unwrap();
        for f in [1, 2] {
            a.change_weight(f, 0).unwrap();
            b.change_weight(f, 0).unwrap();
        }
        let game = game_of(&[&a, &b], 20);
        let analyzer = Analyzer::new(&game).unwrap();
        assert_eq!(analyzer.jackpot(), 20);
        let combos = analyzer.combo_count();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos.get(&ints(&[3, 3])), 20);
    }

    #[test]
    fn jackpot_matches_rows() {
        let a = Die::numeric(2).unwrap();
        let b = Die::numeric(2).unwrap();
        let game = game_of(&[&a, &b], 200);
        let analyzer = Analyzer::new(&game).unwrap();
        let expected = game
            .history()
            .unwrap()
            .rows()
            .iter()
            .filter(|r| r[0] == r[1])
            .count();
        assert_eq!(analyzer.jackpot(), expected);
    }

    #[test]
    fn face_counts_cover_every_face() {
        let a = Die::numeric(6).unwrap();
        let b = Die::numeric(6).unwrap();
        let c = Die::numeric(6).unwrap();
        let game = game_of(&[&a, &b, &c], 12);
        let counts = Analyzer::new(&game).unwrap().face_counts_per_roll();
        assert_eq!(counts.num_rolls(), 12);
        assert_eq!(counts.faces(), ints(&[1, 2, 3, 4, 5, 6]).as_slice());
        assert!(counts.rows().iter().all(|r| r.iter().sum::<usize>() == 3));
        let first = game.history().unwrap().row(0).unwrap();
        let ones = first.iter().filter(|f| **f == Face::Int(1)).count();
        assert_eq!(counts.count(0, &Face::Int(1)), Some(ones));
    }

    #[test]
    fn permutations_split_what_combinations_merge() {
        let a = Die::new([1, 2]).unwrap();
        let b = Die::new([1, 2]).unwrap();
        a.change_weight(2, 0).unwrap();
        let game = game_of(&[&a, &b], 300);
        let analyzer = Analyzer::new(&game).unwrap();

        let combos = analyzer.combo_count();
        let perms = analyzer.permutation_count();
        assert_eq!(combos.total(), 300);
        assert_eq!(perms.total(), 300);
        assert_eq!(perms.get(&ints(&[2, 1])), 0);
        assert_eq!(combos.get(&ints(&[1, 2])), perms.get(&ints(&[1, 2])));
        assert!(combos.keys().all(|k| k.windows(2).all(|w| w[0] <= w[1])));
    }

    #[test]
    fn order_matters_only_for_permutations() {
        let a = Die::new(["x", "y"]).unwrap();
        let b = Die::new(["x", "y"]).unwrap();
        let game = game_of(&[&a, &b], 400);
        let analyzer = Analyzer::new(&game).unwrap();
        let xy = vec![Face::from("x"), Face::from("y")];
        let yx = vec![Face::from("y"), Face::from("x")];
        let perms = analyzer.permutation_count();
        assert_eq!(
            analyzer.combo_count().get(&xy),
            perms.get(&xy) + perms.get(&yx)
        );
        assert_eq!(analyzer.combo_count().get(&yx), 0);
    }
}
