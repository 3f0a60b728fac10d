use rand::SeedableRng;
use rand::rngs::StdRng;

use fifa26_scout::cohort;
use fifa26_scout::dataset::CategoricalField;
use fifa26_scout::demo;

#[test]
fn seeded_generation_is_repeatable() {
    let first = demo::generate(&mut StdRng::seed_from_u64(7), 50);
    let second = demo::generate(&mut StdRng::seed_from_u64(7), 50);

    assert_eq!(first.len(), 50);
    assert_eq!(first.records(), second.records());
    assert_eq!(first.source(), "demo");
}

#[test]
fn generated_players_are_plausible() {
    let dataset = demo::generate(&mut StdRng::seed_from_u64(2026), 400);

    for record in dataset.records() {
        assert!((16..=40).contains(&record.age), "age {}", record.age);
        assert!((45..=93).contains(&record.overall), "overall {}", record.overall);
        assert!(record.potential >= record.overall);
        assert!(record.potential <= 95);
        assert!(record.value_eur.is_some_and(|v| v > 0.0));
        assert!(!record.club_position.is_empty());
    }
    assert!(dataset.distinct(CategoricalField::League).len() > 1);
}

#[test]
fn large_demo_fills_both_cohorts() {
    let dataset = demo::generate(&mut StdRng::seed_from_u64(11), 2_000);

    assert!(!cohort::prospects(dataset.records()).is_empty());
    assert!(!cohort::stars(dataset.records()).is_empty());
}
