use std::borrow::Borrow;
use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::{thread_rng, RngCore};

use crate::error::{Error, Result};
use crate::face::Face;
use crate::table::{GameTable, NarrowTable, WideTable};
use crate::Die;

/// Layout of [`Game::show`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Form {
    #[default]
    Wide,
    Narrow,
}

impl FromStr for Form {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Form::Wide),
            "narrow" => Ok(Form::Narrow),
            _ => Err(Error::UnknownForm(s.to_owned())),
        }
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Wide => f.write_str("wide"),
            Form::Narrow => f.write_str("narrow"),
        }
    }
}

/// Dice rolled together, with the outcomes of the latest play.
///
/// Dice are held by handle, so weight changes made after construction apply
/// to the next [`play`](Game::play). Each play replaces the previous history.
#[derive(Debug)]
pub struct Game<G = ThreadRng>
where
    G: RngCore,
{
    dice: Vec<Die>,
    history: Option<WideTable>,
    rng: G,
}

impl Game<ThreadRng> {
    pub fn new<I, D>(dice: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Borrow<Die>,
    {
        Self::with_rng(dice, thread_rng())
    }
}

impl<G> Game<G>
where
    G: RngCore,
{
    /// Creates a game drawing from `rng`.
    ///
    /// All dice must carry the same set of faces.
    pub fn with_rng<I, D>(dice: I, rng: G) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Borrow<Die>,
    {
        let dice = dice.into_iter().map(|d| d.borrow().clone()).collect_vec();
        let first = dice.first().ok_or(Error::NoDice)?;
        if let Some(die) = dice.iter().position(|d| !first.same_faces(d)) {
            return Err(Error::MismatchedFaces { die });
        }
        Ok(Self {
            dice,
            history: None,
            rng,
        })
    }

    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    #[must_use]
    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    /// Face set of the game, in the order of the first die.
    #[must_use]
    pub fn faces(&self) -> Vec<Face> {
        self.dice[0].faces()
    }

    #[must_use]
    pub fn history(&self) -> Option<&WideTable> {
        self.history.as_ref()
    }

    #[must_use]
    pub fn num_rolls(&self) -> usize {
        self.history.as_ref().map_or(0, WideTable::num_rolls)
    }

    /// Rolls every die `num_rolls` times and replaces the history.
    ///
    /// On error the previous history is kept.
    pub fn play(&mut self, num_rolls: usize) -> Result<()> {
        if num_rolls == 0 {
            return Err(Error::ZeroRolls);
        }
        let Self { dice, history, rng } = self;
        let columns = dice
            .iter()
            .map(|d| d.roll_rng(num_rolls, &mut *rng))
            .collect::<Result<Vec<_>>>()?;
        let rows = (0..num_rolls)
            .map(|roll| columns.iter().map(|c| c[roll].clone()).collect())
            .collect();
        *history = Some(WideTable::new(dice.len(), rows));
        tracing::debug!(rolls = num_rolls, dice = dice.len(), "played game");
        Ok(())
    }

    pub fn show(&self, form: Form) -> Result<GameTable> {
        match form {
            Form::Wide => self.show_wide().map(GameTable::Wide),
            Form::Narrow => self.show_narrow().map(GameTable::Narrow),
        }
    }

    pub fn show_wide(&self) -> Result<WideTable> {
        self.history.clone().ok_or(Error::NotPlayed)
    }

    pub fn show_narrow(&self) -> Result<NarrowTable> {
        self.history
            .as_ref()
            .map(WideTable::to_narrow)
            .ok_or(Error::NotPlayed)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::ErrorKind;
    use crate::table::Tabular;

    fn seeded(dice: &[&Die]) -> Game<ChaCha8Rng> {
        Game::with_rng(dice.iter().copied(), ChaCha8Rng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn construction_errors() {
        assert_eq!(Game::new(Vec::<Die>::new()).unwrap_err(), Error::NoDice);
        let d6 = Die::numeric(6).unwrap();
        let d4 = Die::numeric(4).unwrap();
        assert_eq!(
            Game::new([&d6, &d6, &d4]).unwrap_err(),
            Error::MismatchedFaces { die: 2 }
        );
        let reversed = Die::new([6, 5, 4, 3, 2, 1]).unwrap();
        assert!(Game::new([&d6, &reversed]).is_ok());
    }

    #[test]
    fn show_before_play() {
        let die = Die::numeric(6).unwrap();
        let game = seeded(&[&die]);
        assert_eq!(game.show(Form::Wide).unwrap_err(), Error::NotPlayed);
        assert_eq!(game.show_narrow().unwrap_err().kind(), ErrorKind::InvalidValue);
        assert_eq!(game.num_rolls(), 0);
    }

    #[test]
    fn play_shapes() {
        let a = Die::numeric(6).unwrap();
        let b = Die::numeric(6).unwrap();
        let mut game = seeded(&[&a, &b]);
        game.play(8).unwrap();

        let wide = game.show_wide().unwrap();
        assert_eq!(wide.num_rolls(), 8);
        assert_eq!(wide.num_dice(), 2);
        assert_eq!(wide.columns().len(), 3);

        let narrow = game.show_narrow().unwrap();
        assert_eq!(narrow.len(), 16);
        let from_wide = wide.outcomes().cloned().sorted().collect_vec();
        let from_narrow = narrow.iter().map(|r| r.outcome.clone()).sorted().collect_vec();
        assert_eq!(from_wide, from_narrow);
        assert_eq!(narrow.rows()[3].roll, 1);
        assert_eq!(narrow.rows()[3].die, 1);
    }

    #[test]
    fn play_replaces_history() {
        let die = Die::numeric(6).unwrap();
        let mut game = seeded(&[&die]);
        game.play(5).unwrap();
        game.play(3).unwrap();
        assert_eq!(game.num_rolls(), 3);
        assert_eq!(game.play(0).unwrap_err(), Error::ZeroRolls);
        assert_eq!(game.num_rolls(), 3);
    }

    #[test]
    fn later_weight_changes_apply() {
        let a = Die::new(["H", "T"]).unwrap();
        let b = Die::new(["T", "H"]).unwrap();
        let mut game = seeded(&[&a, &b]);
        a.change_weight("H", 0).unwrap();
        game.play(50).unwrap();
        assert!(game
            .history()
            .unwrap()
            .column(0)
            .all(|f| f.as_text() == Some("T")));
    }

    #[test]
    fn die_shared_by_two_games() {
        let shared = Die::numeric(3).unwrap();
        let other = Die::numeric(3).unwrap();
        let mut first = seeded(&[&shared, &other]);
        let mut second =
            Game::with_rng([&other, &shared], ChaCha8Rng::seed_from_u64(12)).unwrap();
        assert!(first.dice()[0].ptr_eq(&second.dice()[1]));

        shared.change_weight(1, 0).unwrap();
        shared.change_weight(2, 0).unwrap();
        first.play(40).unwrap();
        second.play(40).unwrap();

        let threes = |game: &Game<ChaCha8Rng>, die| {
            game.history()
                .unwrap()
                .column(die)
                .all(|f| f.as_int() == Some(3))
        };
        assert!(threes(&first, 0));
        assert!(threes(&second, 1));
    }

    #[test]
    fn failed_play_keeps_history() {
        let die = Die::new([1, 2]).unwrap();
        let mut game = seeded(&[&die]);
        game.play(4).unwrap();
        let before = game.show_wide().unwrap();
        die.change_weight(1, 0).unwrap();
        die.change_weight(2, 0).unwrap();
        assert_eq!(game.play(2).unwrap_err(), Error::AllWeightsZero);
        assert_eq!(game.show_wide().unwrap(), before);
    }

    #[test]
    fn form_parses() {
        assert_eq!("wide".parse::<Form>(), Ok(Form::Wide));
        assert_eq!("narrow".parse::<Form>(), Ok(Form::Narrow));
        assert_eq!(
            "tall".parse::<Form>().unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(Form::default().to_string(), "wide");
    }
}
