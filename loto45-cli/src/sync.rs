use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;

use crate::fetch::{self, BATCH_SIZE};
use loto45_cache::calendar;
use loto45_cache::models::DrawRecord;
use loto45_cache::store;

/// Bilan d'une synchronisation.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Tirages couverts par l'intervalle demandé.
    pub requested: u32,
    /// Tirages déjà présents dans le cache.
    pub cached: u32,
    /// Nouveaux tirages récupérés et conservés.
    pub fetched: u32,
    /// Entrées écartées à la fusion (hors années demandées ou doublons).
    pub dropped: u32,
    /// Lots entiers en échec (réseau, réponse illisible).
    pub failed_batches: u32,
}

/// Tirages de l'intervalle absents du cache, en ordre croissant.
/// L'intervalle est borné à 1 : les numéros non positifs issus de dates
/// antérieures à l'ancrage ne sont jamais demandés.
pub fn missing_rounds(start_round: i64, end_round: i64, cached: &HashSet<u32>) -> Vec<u32> {
    (start_round.max(1)..=end_round)
        .map(|r| r as u32)
        .filter(|r| !cached.contains(r))
        .collect()
}

/// Fusionne les tirages récupérés dans les résultats existants. Un tirage
/// n'est conservé que si son année tombe dans [start_year, end_year] et que
/// son numéro n'est pas déjà présent. Renvoie (conservés, écartés).
pub fn merge_new(
    results: &mut Vec<DrawRecord>,
    fetched: Vec<DrawRecord>,
    start_year: i32,
    end_year: i32,
) -> (u32, u32) {
    let mut seen: HashSet<u32> = results.iter().map(|r| r.round).collect();
    let mut kept = 0;
    let mut dropped = 0;
    for record in fetched {
        let in_years = record
            .year()
            .map_or(false, |y| start_year <= y && y <= end_year);
        if in_years && seen.insert(record.round) {
            results.push(record);
            kept += 1;
        } else {
            dropped += 1;
        }
    }
    (kept, dropped)
}

/// Réconcilie le cache avec l'intervalle d'années demandé et renvoie les
/// tirages disponibles, triés par numéro croissant.
///
/// Si le cache couvre déjà tous les tirages de l'intervalle, son contenu est
/// renvoyé tel quel, sans requête réseau ni re-filtrage par année (des
/// tirages hors intervalle issus d'exécutions précédentes peuvent donc
/// apparaître). Sinon, seuls les tirages manquants sont demandés, par lots
/// de 50 ; un lot en échec est signalé puis ignoré. Le cache n'est réécrit
/// que si au moins un nouveau tirage a été conservé.
pub fn sync_results(
    client: &Client,
    cache_path: &Path,
    start_year: i32,
    end_year: i32,
) -> Result<(Vec<DrawRecord>, SyncReport)> {
    let (start_round, end_round) = calendar::round_bounds(start_year, end_year);
    let mut cache = store::load(cache_path)?;
    let cached_rounds: HashSet<u32> = cache.results.iter().map(|r| r.round).collect();

    let missing = missing_rounds(start_round, end_round, &cached_rounds);

    let mut report = SyncReport {
        requested: (start_round.max(1)..=end_round).count() as u32,
        cached: cached_rounds.len() as u32,
        ..Default::default()
    };

    if missing.is_empty() {
        return Ok((cache.results, report));
    }

    let pb = ProgressBar::new(missing.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} tirages ({eta})",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    for chunk in missing.chunks(BATCH_SIZE) {
        match fetch::fetch_batch(client, chunk) {
            Ok(records) => {
                let (kept, dropped) = merge_new(&mut cache.results, records, start_year, end_year);
                report.fetched += kept;
                report.dropped += dropped;
            }
            Err(e) => {
                let (first, last) = (chunk[0], chunk[chunk.len() - 1]);
                pb.suspend(|| eprintln!("Échec du lot {}-{} : {:#}", first, last, e));
                report.failed_batches += 1;
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    cache.results.sort_by_key(|r| r.round);
    if report.fetched > 0 {
        cache.updated = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
        store::save(cache_path, &cache)?;
    }
    Ok((cache.results, report))
}
