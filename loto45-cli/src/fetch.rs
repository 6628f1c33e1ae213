use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use loto45_cache::models::{validate_record, DrawRecord, PICK_COUNT};

/// Point d'entrée de l'API lotto-haru (résultats par tirage).
const API_URL: &str = "https://api.lotto-haru.kr/win/analysis.json";
/// Nombre maximum de tirages par requête, limite du fournisseur.
pub const BATCH_SIZE: usize = 50;
const TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0";

/// Entrée brute telle que renvoyée par l'API.
#[derive(Debug, Deserialize)]
pub struct RawDraw {
    chasu: i64,
    date: String,
    ball: Vec<u8>,
    #[serde(rename = "bonusBall")]
    bonus_ball: u8,
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("Impossible de construire le client HTTP")
}

/// Récupère un lot de tirages en une seule requête.
///
/// `Err` signale l'échec du lot entier (réseau, timeout, réponse illisible) ;
/// `Ok(vec![])` signifie que l'API n'a simplement rien renvoyé. Aucune
/// nouvelle tentative n'est faite ici.
pub fn fetch_batch(client: &Client, rounds: &[u32]) -> Result<Vec<DrawRecord>> {
    let chasu = rounds
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("|");
    let url = format!("{}?chasu={}", API_URL, chasu);
    let raw: Vec<RawDraw> = client
        .get(&url)
        .send()
        .with_context(|| format!("Requête échouée (tirages {})", chasu))?
        .error_for_status()
        .context("Réponse HTTP en erreur")?
        .json()
        .context("Réponse JSON illisible")?;
    Ok(records_from_raw(raw))
}

/// Convertit et valide les entrées brutes ; les entrées invalides sont
/// écartées sans interrompre le lot.
pub fn records_from_raw(raw: Vec<RawDraw>) -> Vec<DrawRecord> {
    raw.into_iter().filter_map(to_record).collect()
}

fn to_record(raw: RawDraw) -> Option<DrawRecord> {
    if raw.chasu < 1 {
        return None;
    }
    if raw.ball.len() != PICK_COUNT {
        return None;
    }
    NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d").ok()?;

    let round = raw.chasu as u32;
    let mut numbers = [0u8; PICK_COUNT];
    numbers.copy_from_slice(&raw.ball);
    numbers.sort();

    validate_record(round, &numbers, raw.bonus_ball).ok()?;

    Some(DrawRecord {
        round,
        date: raw.date,
        numbers,
        bonus: raw.bonus_ball,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_from_json(json: &str) -> Vec<RawDraw> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_records_from_raw_sorts_numbers() {
        let raw = raw_from_json(
            r#"[{"chasu": 1154, "date": "2025-01-11", "ball": [34, 3, 9, 12, 45, 20], "bonusBall": 7}]"#,
        );
        let records = records_from_raw(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].round, 1154);
        assert_eq!(records[0].numbers, [3, 9, 12, 20, 34, 45]);
        assert_eq!(records[0].bonus, 7);
    }

    #[test]
    fn test_records_from_raw_drops_wrong_arity() {
        let raw = raw_from_json(
            r#"[{"chasu": 10, "date": "2003-02-08", "ball": [1, 2, 3, 4, 5], "bonusBall": 7}]"#,
        );
        assert!(records_from_raw(raw).is_empty());
    }

    #[test]
    fn test_records_from_raw_drops_out_of_range_number() {
        let raw = raw_from_json(
            r#"[{"chasu": 10, "date": "2003-02-08", "ball": [1, 2, 3, 4, 5, 46], "bonusBall": 7}]"#,
        );
        assert!(records_from_raw(raw).is_empty());
    }

    #[test]
    fn test_records_from_raw_drops_nonpositive_round() {
        let raw = raw_from_json(
            r#"[{"chasu": 0, "date": "2003-02-08", "ball": [1, 2, 3, 4, 5, 6], "bonusBall": 7}]"#,
        );
        assert!(records_from_raw(raw).is_empty());
    }

    #[test]
    fn test_records_from_raw_drops_malformed_date() {
        let raw = raw_from_json(
            r#"[{"chasu": 10, "date": "08/02/2003", "ball": [1, 2, 3, 4, 5, 6], "bonusBall": 7}]"#,
        );
        assert!(records_from_raw(raw).is_empty());
    }

    #[test]
    fn test_records_from_raw_keeps_valid_among_invalid() {
        let raw = raw_from_json(
            r#"[
                {"chasu": 10, "date": "2003-02-08", "ball": [1, 2, 3, 4, 5, 6], "bonusBall": 7},
                {"chasu": 11, "date": "2003-02-15", "ball": [9, 9, 3, 4, 5, 6], "bonusBall": 7}
            ]"#,
        );
        let records = records_from_raw(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].round, 10);
    }
}
