use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::dataset::Dataset;
use crate::demo;

const DEFAULT_CSV: &str = "fifa26.csv";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub csv_path: PathBuf,
    pub force_demo: bool,
    pub demo_players: usize,
    pub export_dir: PathBuf,
    pub tick_rate: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV),
            force_demo: false,
            demo_players: 600,
            export_dir: PathBuf::from("."),
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl DashboardConfig {
    /// Reads `FIFA26_*` variables; call after `.env` files are loaded.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let csv_path = env::var("FIFA26_CSV")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.csv_path);
        let export_dir = env::var("FIFA26_EXPORT_DIR")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);
        let demo_players = parse_env_or("FIFA26_DEMO_PLAYERS", defaults.demo_players)
            .clamp(10, 20_000);
        let tick_ms = parse_env_or("FIFA26_TICK_MS", 250u64).max(50);
        Self {
            csv_path,
            force_demo: env_flag("FIFA26_DEMO"),
            demo_players,
            export_dir,
            tick_rate: Duration::from_millis(tick_ms),
        }
    }

    /// Loads the configured CSV, falling back to a generated dataset when the
    /// file is absent or demo mode is forced. Returned lines are console logs.
    pub fn load_dataset(&self) -> anyhow::Result<(Dataset, Vec<String>)> {
        let mut logs = Vec::new();
        if !self.force_demo && self.csv_path.exists() {
            let (dataset, report) = Dataset::load_csv(&self.csv_path)?;
            logs.push(format!(
                "[INFO] Loaded {} players from {}",
                report.rows_loaded,
                self.csv_path.display()
            ));
            if report.rows_skipped > 0 {
                logs.push(format!("[WARN] Skipped {} rows", report.rows_skipped));
                for err in &report.errors {
                    logs.push(format!("[WARN]   {err}"));
                }
            }
            return Ok((dataset, logs));
        }

        if !self.force_demo {
            logs.push(format!(
                "[WARN] {} not found, using demo data",
                self.csv_path.display()
            ));
        }
        let dataset = demo::generate(&mut rand::thread_rng(), self.demo_players);
        logs.push(format!("[INFO] Generated {} demo players", dataset.len()));
        Ok((dataset, logs))
    }
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|val| parse_flag(&val))
        .unwrap_or(false)
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
