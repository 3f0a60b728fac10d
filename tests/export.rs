use fifa26_scout::cohort::CohortKind;
use fifa26_scout::comparison;
use fifa26_scout::dataset::PlayerRecord;
use fifa26_scout::export;
use fifa26_scout::projection::AgingCurve;

fn player(name: &str, age: u32, overall: u32, potential: u32) -> PlayerRecord {
    PlayerRecord {
        url: String::new(),
        name: name.to_string(),
        positions: "ST".to_string(),
        overall,
        potential,
        age,
        height_cm: Some(182.0),
        value_eur: Some(90_000_000.0),
        wage_eur: Some(150_000.0),
        weight_kg: Some(78.0),
        club: "Test FC".to_string(),
        nationality: "Norway".to_string(),
        club_position: "ST".to_string(),
        league: "Premier League".to_string(),
    }
}

#[test]
fn default_path_is_timestamped_xlsx() {
    let path = export::default_export_path(std::path::Path::new("out"));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name");

    assert!(path.starts_with("out"));
    assert!(name.starts_with("scout_"), "{name}");
    assert!(name.ends_with(".xlsx"), "{name}");
    assert_eq!(name.len(), "scout_20260101_120000.xlsx".len());
}

#[test]
fn workbook_counts_players_and_projection_points() {
    let prospect = player("Kid", 20, 70, 90);
    let star = player("Boss", 30, 88, 88);
    let curve = AgingCurve::default();
    let series = comparison::assemble(
        &curve.project(&prospect, CohortKind::Prospect),
        &curve.project(&star, CohortKind::Star),
    );

    let path = std::env::temp_dir().join(format!("fifa26_scout_test_{}.xlsx", std::process::id()));
    let report = export::export_scout_workbook(&path, &[&prospect, &star], Some(&series))
        .expect("workbook written");

    assert_eq!(report.players, 2);
    assert_eq!(report.projection_points, 19 + 9);
    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn workbook_without_comparison_has_empty_projection_sheet() {
    let path = std::env::temp_dir().join(format!(
        "fifa26_scout_test_empty_{}.xlsx",
        std::process::id()
    ));
    let report = export::export_scout_workbook(&path, &[], None).expect("workbook written");

    assert_eq!(report.players, 0);
    assert_eq!(report.projection_points, 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn shared_name_keeps_the_star_rows_dashed() {
    let prospect = player("Rodri", 20, 70, 90);
    let star = player("Rodri", 30, 88, 88);
    let curve = AgingCurve::default();
    let series = comparison::assemble(
        &curve.project(&prospect, CohortKind::Prospect),
        &curve.project(&star, CohortKind::Star),
    );

    let rows = export::projection_rows_of(&series);
    assert_eq!(rows.len(), 19 + 9);
    let (prospect_rows, star_rows) = rows.split_at(19);
    assert!(prospect_rows.iter().all(|r| r[1] == "prospect" && r[2] == "solid"));
    assert!(star_rows.iter().all(|r| r[1] == "star" && r[2] == "dashed"));
    assert_eq!(star_rows[0][3], "30");
    assert_eq!(star_rows[0][4], "88.00");
}
