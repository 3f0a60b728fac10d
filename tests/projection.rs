use fifa26_scout::cohort::CohortKind;
use fifa26_scout::dataset::PlayerRecord;
use fifa26_scout::projection::{AgingCurve, TrajectoryPoint, linspace};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn assert_point(point: Option<&TrajectoryPoint>, age: u32, rating: f64) {
    let point = point.expect("point present");
    assert_eq!(point.age, age);
    assert_close(point.rating, rating);
}

fn assert_strictly_increasing_ages(points: &[TrajectoryPoint]) {
    for pair in points.windows(2) {
        assert!(
            pair[0].age < pair[1].age,
            "ages not increasing: {} then {}",
            pair[0].age,
            pair[1].age
        );
    }
}

#[test]
fn linspace_endpoints_and_degenerate_counts() {
    assert!(linspace(1.0, 2.0, 0).is_empty());
    assert_eq!(linspace(70.0, 90.0, 1), vec![70.0]);
    assert_eq!(linspace(0.0, 4.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

    let values = linspace(70.0, 90.0, 8);
    assert_eq!(values.len(), 8);
    assert_eq!(values.first().copied(), Some(70.0));
    assert_eq!(values.last().copied(), Some(90.0));
}

#[test]
fn prospect_growth_reaches_potential_at_peak_age() {
    let curve = AgingCurve::default();
    let points = curve.prospect_curve(20, 70, 90);

    let growth: Vec<_> = points.iter().filter(|p| p.age <= 27).copied().collect();
    assert_eq!(growth.len(), 8);
    assert_point(growth.first(), 20, 70.0);
    assert_point(growth.last(), 27, 90.0);
}

#[test]
fn prospect_decline_starts_after_peak() {
    let curve = AgingCurve::default();
    let points = curve.prospect_curve(20, 70, 90);

    let decline: Vec<_> = points.iter().filter(|p| p.age > 27).copied().collect();
    assert_eq!(decline.len(), 11);
    assert_point(decline.first(), 28, 90.0);
    assert_point(decline.last(), 38, 60.0);
    assert_eq!(points.len(), 19);
    assert_strictly_increasing_ages(&points);
}

#[test]
fn prospect_at_peak_age_collapses_growth_to_one_point() {
    let curve = AgingCurve::default();
    let points = curve.prospect_curve(27, 80, 88);

    assert_point(points.first(), 27, 80.0);
    assert_point(points.get(1), 28, 88.0);
    assert_point(points.last(), 38, 70.0);
    assert_strictly_increasing_ages(&points);
}

#[test]
fn prospect_past_peak_age_keeps_ages_increasing() {
    let curve = AgingCurve::default();
    let points = curve.prospect_curve(30, 80, 86);

    assert_point(points.first(), 30, 80.0);
    assert_point(points.get(1), 31, 86.0);
    assert_point(points.last(), 38, 70.0);
    assert_strictly_increasing_ages(&points);
}

#[test]
fn star_declines_fifteen_points_by_retirement() {
    let curve = AgingCurve::default();
    let points = curve.star_curve(30, 88);

    assert_eq!(points.len(), 9);
    assert_point(points.first(), 30, 88.0);
    assert_point(points.last(), 38, 73.0);
    assert_strictly_increasing_ages(&points);
    assert!(points.windows(2).all(|w| w[1].rating <= w[0].rating));
}

#[test]
fn star_past_retirement_is_a_single_point() {
    let curve = AgingCurve::default();
    assert_eq!(
        curve.star_curve(40, 84),
        vec![TrajectoryPoint {
            age: 40,
            rating: 84.0
        }]
    );
}

#[test]
fn star_at_retirement_is_a_single_point() {
    let curve = AgingCurve::default();
    let points = curve.star_curve(38, 86);
    assert_eq!(points.len(), 1);
    assert_point(points.first(), 38, 86.0);
}

#[test]
fn project_tags_player_and_role() {
    let record = PlayerRecord {
        url: String::new(),
        name: "L. Yamal".to_string(),
        positions: "RW".to_string(),
        overall: 86,
        potential: 95,
        age: 17,
        height_cm: None,
        value_eur: None,
        wage_eur: None,
        weight_kg: None,
        club: "FC Barcelona".to_string(),
        nationality: "Spain".to_string(),
        club_position: "RW".to_string(),
        league: "La Liga".to_string(),
    };
    let curve = AgingCurve::default();

    let prospect = curve.project(&record, CohortKind::Prospect);
    assert_eq!(prospect.player, "L. Yamal");
    assert_eq!(prospect.role, CohortKind::Prospect);
    assert_eq!(prospect.len(), 22);
    assert_eq!(prospect.rating_at(27), Some(95.0));
    assert_eq!(prospect.rating_at(16), None);

    let as_star = curve.project(&record, CohortKind::Star);
    assert_eq!(as_star.role, CohortKind::Star);
    assert_point(as_star.first(), 17, 86.0);
    assert_point(as_star.last(), 38, 71.0);
}

#[test]
fn custom_curve_moves_the_peak() {
    let curve = AgingCurve {
        peak_age: 25,
        retirement_age: 35,
        ..AgingCurve::default()
    };
    let points = curve.prospect_curve(21, 70, 90);

    assert_point(points.iter().find(|p| p.age == 25), 25, 90.0);
    assert_point(points.last(), 35, 60.0);
    assert_strictly_increasing_ages(&points);
}

#[test]
fn prospect_past_retirement_is_only_the_current_point() {
    let curve = AgingCurve::default();
    assert_eq!(
        curve.prospect_curve(40, 80, 85),
        vec![TrajectoryPoint {
            age: 40,
            rating: 80.0
        }]
    );
}

#[test]
fn extreme_ages_do_not_overflow() {
    let curve = AgingCurve::default();
    assert_eq!(
        curve.prospect_curve(u32::MAX, 80, 85),
        vec![TrajectoryPoint {
            age: u32::MAX,
            rating: 80.0
        }]
    );
    assert_eq!(curve.star_curve(u32::MAX, 90).len(), 1);
}
