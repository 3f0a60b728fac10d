use fifa26_scout::cohort::CohortKind;
use fifa26_scout::comparison::LineStyle;
use fifa26_scout::dataset::{CategoricalField, Dataset, NumericField, PlayerRecord};
use fifa26_scout::error::ScoutError;
use fifa26_scout::filter::FilterCriteria;
use fifa26_scout::projection::AgingCurve;
use fifa26_scout::scout::{self, Comparison, ScoutInput};

fn player(name: &str, age: u32, overall: u32, potential: u32, league: &str) -> PlayerRecord {
    PlayerRecord {
        url: String::new(),
        name: name.to_string(),
        positions: "CM".to_string(),
        overall,
        potential,
        age,
        height_cm: Some(180.0),
        value_eur: Some(5_000_000.0),
        wage_eur: Some(20_000.0),
        weight_kg: Some(75.0),
        club: "Test FC".to_string(),
        nationality: "Portugal".to_string(),
        club_position: "SUB".to_string(),
        league: league.to_string(),
    }
}

fn five_players() -> Dataset {
    Dataset::from_records(
        vec![
            player("Teen", 19, 60, 86, "Liga Portugal"),
            player("Riser", 22, 75, 88, "Liga Portugal"),
            player("Prime", 25, 80, 84, "La Liga"),
            player("Veteran", 30, 85, 85, "La Liga"),
            player("Legend", 33, 90, 90, "Serie A"),
        ],
        "inline",
    )
}

#[test]
fn filters_rows_and_builds_default_comparison() {
    let dataset = five_players();
    let criteria = FilterCriteria::new()
        .with_range(NumericField::Age, 20.0, 32.0)
        .with_range(NumericField::Overall, 70.0, 90.0);

    let view = scout::evaluate(&dataset, &ScoutInput::new(criteria), &AgingCurve::default())
        .expect("scout evaluates");

    let matched: Vec<&str> = view.matches.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(matched, vec!["Riser", "Prime", "Veteran"]);
    assert_eq!(view.prospect_names, vec!["Riser", "Teen"]);
    assert_eq!(view.star_names, vec!["Legend"]);

    let Comparison::Ready {
        prospect,
        star,
        series,
    } = view.comparison
    else {
        panic!("expected a ready comparison");
    };
    assert_eq!(prospect.player, "Riser");
    assert_eq!(star.player, "Legend");
    assert_eq!(series.style_of("Legend", CohortKind::Star), Some(LineStyle::Dashed));
    assert_eq!(series.title, "Projected overall: Riser vs Legend");
}

#[test]
fn cohorts_ignore_the_row_filter() {
    let dataset = five_players();
    let criteria = FilterCriteria::new().with_values(CategoricalField::League, ["Bundesliga"]);
    let input = ScoutInput::new(criteria).with_prospect("Teen");

    let view = scout::evaluate(&dataset, &input, &AgingCurve::default()).expect("evaluates");

    assert!(view.matches.is_empty());
    assert_eq!(view.prospect_names.len(), 2);
    let series = view.comparison.series().expect("comparison ready");
    assert_eq!(series.styles[0].series, "Teen");
    assert_eq!(series.styles[0].role, CohortKind::Prospect);
}

#[test]
fn empty_star_cohort_reports_no_candidates() {
    let dataset = Dataset::from_records(
        vec![
            player("Teen", 19, 60, 86, "Liga Portugal"),
            player("Prime", 25, 80, 84, "La Liga"),
        ],
        "inline",
    );

    let view = scout::evaluate(&dataset, &ScoutInput::default(), &AgingCurve::default())
        .expect("empty cohort is not an error");

    assert_eq!(
        view.comparison,
        Comparison::NoCandidates {
            prospects: false,
            stars: true,
        }
    );
    assert!(view.comparison.series().is_none());
    assert_eq!(view.matches.len(), 2);
}

#[test]
fn selection_outside_its_cohort_is_not_found() {
    let dataset = five_players();
    let input = ScoutInput::default().with_star("Teen");

    let err = scout::evaluate(&dataset, &input, &AgingCurve::default()).unwrap_err();
    assert_eq!(
        err,
        ScoutError::NotFound {
            cohort: CohortKind::Star,
            name: "Teen".to_string(),
        }
    );
}

#[test]
fn explicit_selection_is_projected() {
    let dataset = five_players();
    let input = ScoutInput::default()
        .with_prospect("Teen")
        .with_star("Legend");

    let view = scout::evaluate(&dataset, &input, &AgingCurve::default()).expect("evaluates");
    let Comparison::Ready { prospect, star, .. } = &view.comparison else {
        panic!("expected a ready comparison");
    };

    assert_eq!(prospect.first().map(|p| (p.age, p.rating)), Some((19, 60.0)));
    assert_eq!(prospect.rating_at(27), Some(86.0));
    assert_eq!(star.first().map(|p| (p.age, p.rating)), Some((33, 90.0)));
    assert_eq!(star.last().map(|p| (p.age, p.rating)), Some((38, 75.0)));
}
