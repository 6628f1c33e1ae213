pub mod sampler;

use loto45_cache::models::{DrawRecord, NumberCount, RangeBucket, POOL_SIZE};

/// Nombre d'apparitions par numéro, indexé par numéro - 1.
pub type FrequencyTable = [u32; POOL_SIZE as usize];

/// Tranches d'affichage fixes pour la répartition.
const BUCKETS: [(u8, u8); 5] = [(1, 10), (11, 20), (21, 30), (31, 40), (41, 45)];

/// Compte les apparitions de chaque numéro principal (bonus exclu).
pub fn frequency(records: &[DrawRecord]) -> FrequencyTable {
    let mut counts = [0u32; POOL_SIZE as usize];
    for record in records {
        for &n in &record.numbers {
            let idx = (n - 1) as usize;
            if idx < counts.len() {
                counts[idx] += 1;
            }
        }
    }
    counts
}

fn number_counts(freq: &FrequencyTable) -> Vec<NumberCount> {
    freq.iter()
        .enumerate()
        .map(|(i, &count)| NumberCount {
            number: (i + 1) as u8,
            count,
        })
        .collect()
}

/// Les `n` numéros les plus fréquents, à égalité le plus petit numéro d'abord.
pub fn top_numbers(freq: &FrequencyTable, n: usize) -> Vec<NumberCount> {
    let mut rows = number_counts(freq);
    rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
    rows.truncate(n);
    rows
}

/// Les `n` numéros les moins fréquents, à égalité le plus petit numéro d'abord.
pub fn bottom_numbers(freq: &FrequencyTable, n: usize) -> Vec<NumberCount> {
    let mut rows = number_counts(freq);
    rows.sort_by(|a, b| a.count.cmp(&b.count).then(a.number.cmp(&b.number)));
    rows.truncate(n);
    rows
}

/// Répartition des apparitions par tranche, en nombre et en pourcentage du
/// total des apparitions.
pub fn range_buckets(freq: &FrequencyTable) -> Vec<RangeBucket> {
    let total: u32 = freq.iter().sum();
    BUCKETS
        .iter()
        .map(|&(lo, hi)| {
            let count = (lo..=hi).map(|n| freq[(n - 1) as usize]).sum();
            let share = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            RangeBucket { lo, hi, count, share }
        })
        .collect()
}
