use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::evaluation::Value;
use crate::evaluation::best;
use rand::Rng;
use std::cmp::Ordering;

/// One simulated deal: the hero's fixed hole cards, a random opponent hole,
/// and a random five-card board, all mutually disjoint.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    hero: Hole,
    villain: Hole,
    board: Board,
}

impl Trial {
    /// Deals a trial from a freshly shuffled deck of the 50 cards the hero
    /// does not hold: the top two cards to the opponent, the next five to
    /// the board.
    pub fn deal<R>(hero: Hole, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut deck = Deck::excluding(Hand::from(hero));
        deck.shuffle(rng);
        let villain = deck.hole();
        let board = deck.board();
        Self {
            hero,
            villain,
            board,
        }
    }
    pub fn hero(&self) -> &Hole {
        &self.hero
    }
    pub fn villain(&self) -> &Hole {
        &self.villain
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// The best five-of-seven values for hero and villain.
    pub fn showdown(&self) -> (Value, Value) {
        let hero = best(&self.board.with(&self.hero));
        let villain = best(&self.board.with(&self.villain));
        (hero, villain)
    }
    /// Greater is a win for the hero, equal a tie, less a loss.
    pub fn outcome(&self) -> Ordering {
        let (hero, villain) = self.showdown();
        hero.cmp(&villain)
    }
}

impl From<(Hole, Hole, Board)> for Trial {
    fn from((hero, villain, board): (Hole, Hole, Board)) -> Self {
        let this = Self {
            hero,
            villain,
            board,
        };
        assert!(Hand::from(this).size() == 9, "trial cards overlap");
        this
    }
}

/// every card in play
impl From<Trial> for Hand {
    fn from(trial: Trial) -> Self {
        Hand::add(
            Hand::add(Hand::from(trial.hero), Hand::from(trial.villain)),
            Hand::from(trial.board),
        )
    }
}

impl crate::Arbitrary for Trial {
    fn random() -> Self {
        Self::deal(<Hole as crate::Arbitrary>::random(), &mut rand::rng())
    }
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {} on {}", self.hero, self.villain, self.board)
    }
}
