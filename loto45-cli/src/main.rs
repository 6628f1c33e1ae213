mod analysis;
mod display;
mod fetch;
mod sync;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::analysis::sampler::suggest_grids;
use crate::analysis::{bottom_numbers, frequency, range_buckets, top_numbers};
use crate::display::{
    display_buckets, display_draws, display_frequencies, display_grids, display_sync_summary,
};
use loto45_cache::models::DrawRecord;
use loto45_cache::store;

#[derive(Parser)]
#[command(name = "loto45", about = "Récupération et analyse des tirages Lotto 6/45")]
struct Cli {
    /// Chemin du fichier cache (JSON)
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synchroniser le cache avec l'API distante
    Sync {
        /// Première année de l'intervalle
        #[arg(long, default_value = "2020")]
        start_year: i32,

        /// Dernière année de l'intervalle
        #[arg(long, default_value = "2026")]
        end_year: i32,
    },

    /// Afficher le chemin du fichier cache
    CachePath,

    /// Lister les derniers tirages en cache
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// Afficher les statistiques de fréquences
    Stats {
        #[arg(long, default_value = "2020")]
        start_year: i32,

        #[arg(long, default_value = "2026")]
        end_year: i32,
    },

    /// Suggérer des grilles pondérées par les fréquences observées
    Suggest {
        /// Nombre de grilles à générer
        #[arg(short, long, default_value = "5")]
        count: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "2020")]
        start_year: i32,

        #[arg(long, default_value = "2026")]
        end_year: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cache_path = cli.cache.clone().unwrap_or_else(store::default_cache_path);

    match cli.command {
        Command::Sync {
            start_year,
            end_year,
        } => cmd_sync(&cache_path, start_year, end_year),
        Command::CachePath => {
            println!("{}", cache_path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&cache_path, last),
        Command::Stats {
            start_year,
            end_year,
        } => cmd_stats(&cache_path, start_year, end_year),
        Command::Suggest {
            count,
            seed,
            start_year,
            end_year,
        } => cmd_suggest(&cache_path, count, seed, start_year, end_year),
    }
}

/// Réconcilie le cache et renvoie les tirages disponibles ; `None` si aucune
/// donnée n'est disponible (cache vide et API injoignable).
fn synced_results(
    cache_path: &Path,
    start_year: i32,
    end_year: i32,
) -> Result<Option<Vec<DrawRecord>>> {
    let client = fetch::build_client()?;
    let (results, report) = sync::sync_results(&client, cache_path, start_year, end_year)?;
    display_sync_summary(&report);
    if results.is_empty() {
        println!("Aucune donnée disponible.");
        return Ok(None);
    }
    Ok(Some(results))
}

fn cmd_sync(cache_path: &Path, start_year: i32, end_year: i32) -> Result<()> {
    println!("📡 Synchronisation des tirages {}-{}...", start_year, end_year);
    synced_results(cache_path, start_year, end_year)?;
    Ok(())
}

fn cmd_list(cache_path: &Path, last: usize) -> Result<()> {
    let cache = store::load(cache_path)?;
    if cache.results.is_empty() {
        println!("Cache vide. Lancez d'abord : loto45 sync");
        return Ok(());
    }
    let start = cache.results.len().saturating_sub(last);
    display_draws(&cache.results[start..]);
    Ok(())
}

fn cmd_stats(cache_path: &Path, start_year: i32, end_year: i32) -> Result<()> {
    let Some(results) = synced_results(cache_path, start_year, end_year)? else {
        return Ok(());
    };

    let freq = frequency(&results);
    display_frequencies(&top_numbers(&freq, 10), &bottom_numbers(&freq, 10), results.len());
    display_buckets(&range_buckets(&freq));
    Ok(())
}

fn cmd_suggest(
    cache_path: &Path,
    count: usize,
    seed: Option<u64>,
    start_year: i32,
    end_year: i32,
) -> Result<()> {
    let Some(results) = synced_results(cache_path, start_year, end_year)? else {
        return Ok(());
    };

    let freq = frequency(&results);
    let grids = suggest_grids(&freq, count, seed)?;
    display_grids(&grids);

    println!("\nSuggestions indicatives, fondées sur les fréquences passées ;");
    println!("aucune validité prédictive. Bonne chance !");
    Ok(())
}
