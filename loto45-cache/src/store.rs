use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::Cache;

/// Emplacement par défaut du cache ; toute opération prend néanmoins un
/// chemin explicite, les tests pointent vers un répertoire temporaire.
pub fn default_cache_path() -> PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("loto45_cache.json");
    path
}

/// Charge le cache. Un fichier absent donne un cache vide ; un fichier
/// présent mais illisible est une erreur.
pub fn load(path: &Path) -> Result<Cache> {
    if !path.exists() {
        return Ok(Cache::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire le cache {:?}", path))?;
    let cache: Cache = serde_json::from_str(&raw)
        .with_context(|| format!("Cache corrompu {:?}", path))?;
    Ok(cache)
}

pub fn save(path: &Path, cache: &Cache) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer le répertoire {:?}", parent))?;
    }
    let raw = serde_json::to_string_pretty(cache).context("Échec de la sérialisation du cache")?;
    std::fs::write(path, raw).with_context(|| format!("Impossible d'écrire le cache {:?}", path))?;
    Ok(())
}
