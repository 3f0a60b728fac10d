use rand::Rng;
use rand::seq::SliceRandom;

use crate::dataset::{Dataset, PlayerRecord};

const FIRST_INITIALS: &[&str] = &[
    "A.", "B.", "C.", "D.", "E.", "F.", "G.", "H.", "J.", "K.", "L.", "M.", "N.", "P.", "R.",
    "S.", "T.", "V.",
];
const SURNAMES: &[&str] = &[
    "Alves", "Barros", "Costa", "Duarte", "Esteves", "Ferreira", "Gomes", "Hale", "Ibarra",
    "Jansen", "Keller", "Lopes", "Moreau", "Novak", "Okafor", "Pereira", "Quinn", "Rossi",
    "Silva", "Tanaka", "Ueda", "Vidal", "Weber", "Yilmaz", "Zanetti",
];
const CLUB_POSITIONS: &[&str] = &[
    "GK", "RB", "LB", "RCB", "LCB", "CDM", "RCM", "LCM", "CAM", "RW", "LW", "ST", "SUB", "RES",
];
// (league, clubs)
const LEAGUES: &[(&str, &[&str])] = &[
    ("Premier League", &["Northbridge FC", "Harbor City", "Redvale United"]),
    ("La Liga", &["Real Sierra", "Atletico Costa", "CD Mirador"]),
    ("Bundesliga", &["FC Rheinfeld", "Borussia Talberg", "SV Nordhafen"]),
    ("Serie A", &["AC Laguna", "Sporting Valle", "US Montebello"]),
    ("Ligue 1", &["Olympique Rivage", "FC Beaumont", "Stade Clairmont"]),
];
const NATIONS: &[&str] = &[
    "Brazil", "Argentina", "France", "Spain", "England", "Germany", "Portugal", "Italy",
    "Netherlands", "Belgium", "Nigeria", "Japan", "United States", "Croatia", "Uruguay",
];

/// Synthetic player table used when no CSV is available.
pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Dataset {
    let records = (0..count).map(|idx| demo_player(rng, idx)).collect();
    Dataset::from_records(records, "demo")
}

fn demo_player<R: Rng>(rng: &mut R, idx: usize) -> PlayerRecord {
    let age: u32 = rng.gen_range(16..=40);
    let overall: u32 = match age {
        16..=20 => rng.gen_range(45..=80),
        21..=26 => rng.gen_range(55..=90),
        27..=32 => rng.gen_range(60..=93),
        _ => rng.gen_range(55..=86),
    };
    // Young players carry the most headroom.
    let headroom: u32 = match age {
        16..=20 => rng.gen_range(5..=25),
        21..=23 => rng.gen_range(2..=15),
        24..=27 => rng.gen_range(0..=6),
        _ => 0,
    };
    let potential = (overall + headroom).min(95);

    let initial = FIRST_INITIALS.choose(rng).copied().unwrap_or("A.");
    let surname = SURNAMES.choose(rng).copied().unwrap_or("Silva");
    let (league, club) = match LEAGUES.choose(rng) {
        Some((league, clubs)) => (*league, clubs.choose(rng).copied().unwrap_or("Free Agent")),
        None => ("Premier League", "Northbridge FC"),
    };
    let position = CLUB_POSITIONS.choose(rng).copied().unwrap_or("SUB");
    let nationality = NATIONS.choose(rng).copied().unwrap_or("Brazil");

    let quality = f64::from(overall.saturating_sub(45)) / 48.0;
    let value = (quality.powi(3) * 180_000_000.0 / 1_000.0).round() * 1_000.0;
    let wage = (quality.powi(2) * 350_000.0 / 500.0).round() * 500.0;

    PlayerRecord {
        url: format!("https://example.invalid/player/{}", 100_000 + idx),
        name: format!("{initial} {surname}"),
        positions: demo_positions(position).to_string(),
        overall,
        potential,
        age,
        height_cm: Some(f64::from(rng.gen_range(165..=198))),
        value_eur: Some(value.max(10_000.0)),
        wage_eur: Some(wage.max(500.0)),
        weight_kg: Some(f64::from(rng.gen_range(60..=95))),
        club: club.to_string(),
        nationality: nationality.to_string(),
        club_position: position.to_string(),
        league: league.to_string(),
    }
}

fn demo_positions(club_position: &str) -> &'static str {
    match club_position {
        "GK" => "GK",
        "RB" | "LB" => "RB, LB",
        "RCB" | "LCB" => "CB",
        "CDM" => "CDM, CM",
        "RCM" | "LCM" => "CM",
        "CAM" => "CAM, CM",
        "RW" | "LW" => "RW, LW",
        "ST" => "ST",
        _ => "CM, CAM",
    }
}
