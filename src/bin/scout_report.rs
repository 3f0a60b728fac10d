use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use fifa26_scout::charts;
use fifa26_scout::cli::{arg_value, build_criteria, demo_seed, has_flag};
use fifa26_scout::config::DashboardConfig;
use fifa26_scout::dataset::SCOUT_COLUMNS;
use fifa26_scout::demo;
use fifa26_scout::export;
use fifa26_scout::projection::{AgingCurve, Trajectory};
use fifa26_scout::scout::{self, Comparison, ScoutInput};

const MAX_PRINTED_ROWS: usize = 25;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut config = DashboardConfig::from_env();
    if let Some(path) = arg_value(&args, "--csv") {
        config.csv_path = PathBuf::from(path);
    }
    if has_flag(&args, "--demo") {
        config.force_demo = true;
    }

    let (dataset, logs) = match demo_seed(&args)? {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            let dataset = demo::generate(&mut rng, config.demo_players);
            let mut logs = Vec::new();
            if !config.force_demo && config.csv_path.exists() {
                logs.push(format!(
                    "[WARN] --seed ignores {}, using demo data",
                    config.csv_path.display()
                ));
            }
            logs.push(format!(
                "[INFO] Generated {} demo players (seed {seed})",
                dataset.len()
            ));
            (dataset, logs)
        }
        None => config.load_dataset()?,
    };
    for line in &logs {
        eprintln!("{line}");
    }

    let criteria = build_criteria(&args, &dataset)?;
    let mut input = ScoutInput::new(criteria);
    if let Some(name) = arg_value(&args, "--prospect") {
        input = input.with_prospect(name);
    }
    if let Some(name) = arg_value(&args, "--star") {
        input = input.with_star(name);
    }

    let curve = AgingCurve::default();
    let view = scout::evaluate(&dataset, &input, &curve)?;

    println!("Scout report");
    println!("Source: {}", dataset.source());
    println!("Players: {}", dataset.len());
    println!("Players found: {}", view.matches.len());
    println!(
        "Cohorts: {} prospects, {} stars",
        view.prospect_names.len(),
        view.star_names.len()
    );

    let header = SCOUT_COLUMNS
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(" | ");
    println!();
    println!("{header}");
    for record in view.matches.iter().take(MAX_PRINTED_ROWS) {
        let row = SCOUT_COLUMNS
            .iter()
            .map(|c| record.cell(*c))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{row}");
    }
    if view.matches.len() > MAX_PRINTED_ROWS {
        println!("... {} more", view.matches.len() - MAX_PRINTED_ROWS);
    }

    println!();
    match &view.comparison {
        Comparison::Ready {
            prospect,
            star,
            series,
        } => {
            println!("{}", series.title);
            print_trajectory(prospect);
            print_trajectory(star);
        }
        Comparison::NoCandidates { prospects, stars } => {
            println!("No candidates available (prospects empty: {prospects}, stars empty: {stars})");
        }
    }

    if let Some(path) = arg_value(&args, "--xlsx") {
        let path = PathBuf::from(path);
        let report =
            export::export_scout_workbook(&path, &view.matches, view.comparison.series())?;
        println!();
        println!(
            "Wrote {} players and {} projection points to {}",
            report.players,
            report.projection_points,
            path.display()
        );
    }

    if let Some(path) = arg_value(&args, "--json") {
        let mut all = charts::dashboard_charts(dataset.records());
        if let Some(series) = view.comparison.series() {
            all.push(charts::comparison_chart(series.clone()));
        }
        let json = serde_json::to_string_pretty(&all).context("serialize charts")?;
        std::fs::write(&path, json).with_context(|| format!("write {path}"))?;
        println!("Wrote {} charts to {path}", all.len());
    }

    Ok(())
}

fn print_trajectory(trajectory: &Trajectory) {
    let points = trajectory
        .points
        .iter()
        .map(|p| format!("{}:{:.1}", p.age, p.rating))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} ({}): {points}", trajectory.player, trajectory.role);
}
