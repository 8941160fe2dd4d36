use super::{ProjectError, ProjectOutput, SENTINEL};
use crate::render::RenderContext;
use rand::Rng;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Heads,
    Tails,
}

pub fn flip_coin<R: Rng + ?Sized>(rng: &mut R) -> Coin {
    if rng.gen_bool(0.5) { Coin::Heads } else { Coin::Tails }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Coin::Heads => "Heads",
            Coin::Tails => "Tails",
        })
    }
}

impl Coin {
    pub fn write(self, ctx: &mut RenderContext) {
        ctx.insert("coin_flip", self.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors) | (Hand::Paper, Hand::Rock) | (Hand::Scissors, Hand::Paper)
        )
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        })
    }
}

/// Matches the exact button values posted by the page.
impl FromStr for Hand {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rock" => Ok(Hand::Rock),
            "Paper" => Ok(Hand::Paper),
            "Scissors" => Ok(Hand::Scissors),
            other => Err(ProjectError::undefined(format!("unknown hand {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    Win,
    Lose,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Tie => "It's a tie!",
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
        }
    }
}

pub fn judge(player: Hand, ai: Hand) -> Outcome {
    if player == ai {
        Outcome::Tie
    } else if player.beats(ai) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Hand,
    pub ai: Hand,
    pub outcome: Outcome,
}

/// Plays one round. An unrecognised choice is rejected before the computer picks.
pub fn play<R: Rng + ?Sized>(choice: &str, rng: &mut R) -> Result<Round, ProjectError> {
    let player: Hand = choice.parse()?;
    let ai = Hand::random(rng);
    Ok(Round {
        player,
        ai,
        outcome: judge(player, ai),
    })
}

impl ProjectOutput for Round {
    const FEATURE: &'static str = "rock-paper-scissors";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("player_hand", self.player.to_string());
        ctx.insert("ai_hand", self.ai.to_string());
        ctx.insert("result", self.outcome.message());
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("result", SENTINEL);
    }
}
