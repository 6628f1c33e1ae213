use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::sync::SyncReport;
use loto45_cache::models::{DrawRecord, NumberCount, RangeBucket};

fn numbers_str(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_draws(draws: &[DrawRecord]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tirage", "Date", "Numéros", "Bonus"]);

    for draw in draws {
        table.add_row(vec![
            &draw.round.to_string(),
            &draw.date,
            &numbers_str(&draw.numbers),
            &format!("{:2}", draw.bonus),
        ]);
    }

    println!("{table}");
}

pub fn display_sync_summary(report: &SyncReport) {
    println!("Synchronisation terminée :");
    println!("  Tirages demandés  : {}", report.requested);
    println!("  Déjà en cache     : {}", report.cached);
    println!("  Nouveaux          : {}", report.fetched);
    if report.dropped > 0 {
        println!("  Écartés           : {}", report.dropped);
    }
    if report.failed_batches > 0 {
        println!("  Lots en échec     : {}", report.failed_batches);
    }
}

pub fn display_frequencies(top: &[NumberCount], bottom: &[NumberCount], draw_count: usize) {
    println!("\n📊 Statistiques sur {} tirages\n", draw_count);

    println!("── Numéros les plus fréquents ──");
    display_count_table(top, draw_count);

    println!("\n── Numéros les moins fréquents ──");
    display_count_table(bottom, draw_count);
}

fn display_count_table(rows: &[NumberCount], draw_count: usize) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Apparitions", "Part des tirages"]);

    for row in rows {
        let part = if draw_count > 0 {
            row.count as f64 / draw_count as f64 * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            &format!("{:2}", row.number),
            &row.count.to_string(),
            &format!("{:.1} %", part),
        ]);
    }
    println!("{table}");
}

pub fn display_buckets(buckets: &[RangeBucket]) {
    println!("\n📈 Répartition par tranche\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tranche", "Apparitions", "Part"]);

    for bucket in buckets {
        table.add_row(vec![
            &format!("{:2}-{:2}", bucket.lo, bucket.hi),
            &bucket.count.to_string(),
            &format!("{:.1} %", bucket.share),
        ]);
    }
    println!("{table}");
}

pub fn display_grids(grids: &[[u8; 6]]) {
    println!("\n🎲 Grilles suggérées\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Numéros"]);

    for (i, grid) in grids.iter().enumerate() {
        table.add_row(vec![&format!("{}", i + 1), &numbers_str(grid)]);
    }
    println!("{table}");
}
