use std::collections::BTreeSet;

use anyhow::Result;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::FrequencyTable;
use loto45_cache::models::PICK_COUNT;

/// Génère `count` grilles par tirage pondéré avec remise.
///
/// Poids : fréquence + 1, le lissage additif garantit une probabilité
/// strictement positive même pour un numéro jamais sorti. Un doublon au sein
/// d'une grille est simplement rejoué jusqu'à obtenir six numéros distincts.
/// Chaque grille est un essai indépendant, renvoyée triée.
pub fn suggest_grids(
    freq: &FrequencyTable,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<[u8; 6]>> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let weights: Vec<u32> = freq.iter().map(|&c| c + 1).collect();
    let dist = WeightedIndex::new(&weights)?;

    let mut grids = Vec::with_capacity(count);
    for _ in 0..count {
        let mut picked = BTreeSet::new();
        while picked.len() < PICK_COUNT {
            picked.insert((dist.sample(&mut rng) + 1) as u8);
        }
        let mut grid = [0u8; PICK_COUNT];
        for (slot, n) in grid.iter_mut().zip(picked) {
            *slot = n;
        }
        grids.push(grid);
    }
    Ok(grids)
}
