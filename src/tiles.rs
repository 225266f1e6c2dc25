use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::dino::Dino;
use crate::human::Human;

/// Species never drawn for comparison and never given a randomized fact.
pub const EXCLUDED_SPECIES: &str = "pigeon";

const COMPARISONS: usize = 3;

/// One display unit of the infographic, render-once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub name: String,
    pub fact: String,
    pub image: String,
}

impl Tile {
    fn for_dino(species: &str, fact: String) -> Self {
        Self {
            name: species.to_string(),
            fact,
            image: format!("images/{}.png", species.to_lowercase()),
        }
    }

    fn for_human(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fact: String::new(),
            image: "images/human.png".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TileError {
    #[error("need at least {required} dinos eligible for comparison, found {eligible}")]
    NotEnoughEligible { required: usize, eligible: usize },
}

/// Builds the infographic: three randomly chosen dinos are compared against
/// the human (weight, then diet, then height, in encounter order), every
/// other dino shows one of its facts, and the human tile lands in the middle
/// of the grid. Returns N+1 tiles for N dinos.
pub fn build_tiles(
    dinos: &[Dino],
    human: &Human,
    rng: &mut impl Rng,
) -> Result<Vec<Tile>, TileError> {
    let selected = pick_comparison_indices(dinos, rng)?;

    let mut tiles: Vec<Tile> = Vec::with_capacity(dinos.len() + 1);
    let mut comparisons = 0;
    for (index, dino) in dinos.iter().enumerate() {
        let fact = if selected.contains(&index) {
            let sentence = match comparisons {
                1 => dino.compare_diet(&human.diet),
                2 => dino.compare_height(human.height),
                _ => dino.compare_weight(human.weight),
            };
            comparisons += 1;
            sentence
        } else if is_excluded(&dino.species) {
            dino.fact.clone()
        } else {
            random_fact(dino, rng)
        };
        tiles.push(Tile::for_dino(&dino.species, fact));
    }

    let middle = (tiles.len() + 1) / 2;
    tiles.insert(middle, Tile::for_human(&human.name));
    Ok(tiles)
}

fn is_excluded(species: &str) -> bool {
    species.eq_ignore_ascii_case(EXCLUDED_SPECIES)
}

/// Samples three distinct eligible indices without replacement, uniformly.
/// Fails instead of spinning when the roster cannot supply three.
fn pick_comparison_indices(dinos: &[Dino], rng: &mut impl Rng) -> Result<Vec<usize>, TileError> {
    // The draw range stops one short of the last entry.
    let draw_range = dinos.len().saturating_sub(1);
    let eligible: Vec<usize> = (0..draw_range)
        .filter(|&i| !is_excluded(&dinos[i].species))
        .collect();
    if eligible.len() < COMPARISONS {
        return Err(TileError::NotEnoughEligible {
            required: COMPARISONS,
            eligible: eligible.len(),
        });
    }
    Ok(eligible
        .choose_multiple(rng, COMPARISONS)
        .copied()
        .collect())
}

fn random_fact(dino: &Dino, rng: &mut impl Rng) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} is from {}", dino.species, dino.origin),
        1 => format!("{} lived during {}", dino.species, dino.era),
        _ => dino.fact.clone(),
    }
}
