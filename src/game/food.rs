use super::board::{Occupancy, Position};
use crate::consts;
use rand::Rng;

/// The kinds of food that can appear on the board
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum FoodKind {
    /// Plain food
    Normal,

    /// Worth double points
    Big,

    /// Worth nothing, but drops the speed level by one
    Slow,
}

impl FoodKind {
    /// Points awarded for eating this food
    pub(crate) fn score(self) -> u32 {
        match self {
            FoodKind::Normal => 10,
            FoodKind::Big => 20,
            FoodKind::Slow => 0,
        }
    }

    /// Pick a kind from a uniform draw in `[0, 1)`
    pub(crate) fn from_draw(r: f64) -> FoodKind {
        if r < consts::NORMAL_FOOD_THRESHOLD {
            FoodKind::Normal
        } else if r < consts::BIG_FOOD_THRESHOLD {
            FoodKind::Big
        } else {
            FoodKind::Slow
        }
    }

    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> FoodKind {
        FoodKind::from_draw(rng.random::<f64>())
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FoodKind::Normal => "normal",
            FoodKind::Big => "big",
            FoodKind::Slow => "slow",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Position,
    pub(crate) kind: FoodKind,
}

impl Occupancy for Food {
    fn occupies(&self, pos: Position) -> bool {
        self.position == pos
    }
}
