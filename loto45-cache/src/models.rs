use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Plus grand numéro du pool (tirage parmi 1-45).
pub const POOL_SIZE: u8 = 45;
/// Nombre de numéros principaux par tirage.
pub const PICK_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub round: u32,
    pub date: String,
    pub numbers: [u8; 6],
    pub bonus: u8,
}

impl DrawRecord {
    /// Année du tirage, extraite du champ date (AAAA-MM-JJ).
    pub fn year(&self) -> Option<i32> {
        self.date.split('-').next()?.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cache {
    pub updated: Option<String>,
    pub results: Vec<DrawRecord>,
}

#[derive(Debug, Clone)]
pub struct NumberCount {
    pub number: u8,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct RangeBucket {
    pub lo: u8,
    pub hi: u8,
    pub count: u32,
    pub share: f64,
}

pub fn validate_record(round: u32, numbers: &[u8; 6], bonus: u8) -> Result<()> {
    if round == 0 {
        bail!("Numéro de tirage nul");
    }
    for &n in numbers {
        if n < 1 || n > POOL_SIZE {
            bail!("Numéro {} hors limites (1-{})", n, POOL_SIZE);
        }
    }
    if bonus < 1 || bonus > POOL_SIZE {
        bail!("Bonus {} hors limites (1-{})", bonus, POOL_SIZE);
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                bail!("Numéro en double : {}", numbers[i]);
            }
        }
    }
    Ok(())
}
