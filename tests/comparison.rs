use fifa26_scout::charts::{self, ChartData, ChartKind};
use fifa26_scout::cohort::CohortKind;
use fifa26_scout::comparison::{self, LineStyle};
use fifa26_scout::projection::AgingCurve;
use fifa26_scout::projection::Trajectory;

fn trajectories() -> (Trajectory, Trajectory) {
    let curve = AgingCurve::default();
    let prospect = Trajectory {
        player: "J. Musiala".to_string(),
        role: CohortKind::Prospect,
        points: curve.prospect_curve(22, 88, 92),
    };
    let star = Trajectory {
        player: "Rodri".to_string(),
        role: CohortKind::Star,
        points: curve.star_curve(28, 89),
    };
    (prospect, star)
}

#[test]
fn assemble_keeps_both_series_in_order() {
    let (prospect, star) = trajectories();
    let combined = comparison::assemble(&prospect, &star);

    assert_eq!(combined.title, "Projected overall: J. Musiala vs Rodri");
    assert_eq!(combined.points.len(), prospect.len() + star.len());
    assert!(
        combined.points[..prospect.len()]
            .iter()
            .all(|p| p.series == "J. Musiala" && p.role == CohortKind::Prospect)
    );
    assert!(
        combined.points[prospect.len()..]
            .iter()
            .all(|p| p.series == "Rodri" && p.role == CohortKind::Star)
    );
}

#[test]
fn star_series_is_dashed_and_prospect_solid() {
    let (prospect, star) = trajectories();
    let combined = comparison::assemble(&prospect, &star);

    assert_eq!(combined.styles.len(), 2);
    assert_eq!(combined.style_of("J. Musiala", CohortKind::Prospect), Some(LineStyle::Solid));
    assert_eq!(combined.style_of("Rodri", CohortKind::Star), Some(LineStyle::Dashed));
    assert_eq!(combined.style_of("Rodri", CohortKind::Prospect), None);
}

#[test]
fn series_points_and_bounds_cover_both_players() {
    let (prospect, star) = trajectories();
    let combined = comparison::assemble(&prospect, &star);

    let star_points = combined.series_points(&combined.styles[1]);
    assert_eq!(star_points.len(), 11);
    assert_eq!(star_points.first().copied(), Some((28.0, 89.0)));
    assert_eq!(star_points.last().copied(), Some((38.0, 74.0)));

    assert_eq!(combined.age_bounds(), Some((22, 38)));
    let (lo, hi) = combined.rating_bounds().expect("bounds");
    assert!((lo - 74.0).abs() < 1e-9, "lo {lo}");
    assert!((hi - 92.0).abs() < 1e-9, "hi {hi}");
}

#[test]
fn same_name_in_both_roles_stays_separate() {
    let curve = AgingCurve::default();
    let first = Trajectory {
        player: "J. Silva".to_string(),
        role: CohortKind::Prospect,
        points: curve.prospect_curve(20, 70, 90),
    };
    let second = Trajectory {
        player: "J. Silva".to_string(),
        role: CohortKind::Star,
        points: curve.star_curve(30, 88),
    };
    let combined = comparison::assemble(&first, &second);

    assert_eq!(combined.series_points(&combined.styles[0]).len(), first.len());
    assert_eq!(combined.series_points(&combined.styles[1]).len(), second.len());
    assert_eq!(
        combined.style_of("J. Silva", CohortKind::Prospect),
        Some(LineStyle::Solid)
    );
    assert_eq!(
        combined.style_of("J. Silva", CohortKind::Star),
        Some(LineStyle::Dashed)
    );
}

#[test]
fn comparison_chart_wraps_the_series() {
    let (prospect, star) = trajectories();
    let combined = comparison::assemble(&prospect, &star);
    let chart = charts::comparison_chart(combined.clone());

    assert_eq!(chart.spec.kind, ChartKind::Line);
    assert_eq!(chart.spec.title, combined.title);
    assert_eq!(chart.data, ChartData::Series(combined));
}
