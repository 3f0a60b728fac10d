use fifa26_scout::cli::{arg_value, build_criteria, demo_seed, has_flag, parse_list, parse_range};
use fifa26_scout::dataset::{CategoricalField, Dataset, NumericField, PlayerRecord};
use fifa26_scout::filter::{self, Predicate};

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn player(name: &str, age: u32, overall: u32, position: &str, league: &str) -> PlayerRecord {
    PlayerRecord {
        url: String::new(),
        name: name.to_string(),
        positions: position.to_string(),
        overall,
        potential: overall,
        age,
        height_cm: None,
        value_eur: None,
        wage_eur: None,
        weight_kg: None,
        club: "Test FC".to_string(),
        nationality: "Spain".to_string(),
        club_position: position.to_string(),
        league: league.to_string(),
    }
}

fn dataset() -> Dataset {
    Dataset::from_records(
        vec![
            player("A", 19, 60, "ST", "La Liga"),
            player("B", 22, 75, "CAM", "Premier League"),
            player("C", 25, 80, "ST", "Premier League"),
            player("D", 30, 85, "GK", "Serie A"),
            player("E", 33, 90, "SUB", "La Liga"),
        ],
        "inline",
    )
}

fn matched(args: &[String]) -> Vec<String> {
    let dataset = dataset();
    let criteria = build_criteria(args, &dataset).expect("criteria build");
    filter::apply(dataset.records(), &criteria)
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn both_flag_forms_read_the_same_value() {
    let joined = args(&["--age=20-32"]);
    let split = args(&["--age", "20-32"]);

    assert_eq!(arg_value(&joined, "--age").as_deref(), Some("20-32"));
    assert_eq!(arg_value(&split, "--age").as_deref(), Some("20-32"));
    assert_eq!(matched(&joined), vec!["B", "C", "D"]);
    assert_eq!(matched(&split), vec!["B", "C", "D"]);
}

#[test]
fn blank_or_missing_values_are_ignored() {
    assert_eq!(arg_value(&args(&["--age="]), "--age"), None);
    assert_eq!(arg_value(&args(&["--age"]), "--age"), None);
    assert_eq!(arg_value(&args(&["--ages=1-2"]), "--age"), None);
    assert_eq!(
        arg_value(&args(&["--csv=", "--csv", " data.csv "]), "--csv").as_deref(),
        Some("data.csv")
    );
}

#[test]
fn flags_are_exact_matches() {
    let list = args(&["--demo", "--json", "out.json"]);
    assert!(has_flag(&list, "--demo"));
    assert!(!has_flag(&list, "--dem"));
    assert!(!has_flag(&args(&["--demo=1"]), "--demo"));
}

#[test]
fn ranges_need_two_numbers() {
    assert_eq!(parse_range("20-32"), Some((20.0, 32.0)));
    assert_eq!(parse_range(" 70 - 90 "), Some((70.0, 90.0)));
    assert_eq!(parse_range("20"), None);
    assert_eq!(parse_range("a-b"), None);
    assert_eq!(parse_range("20-"), None);
}

#[test]
fn malformed_range_flag_is_an_error() {
    let err = build_criteria(&args(&["--overall", "high"]), &dataset()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("--overall"), "{msg}");
    assert!(msg.contains("MIN-MAX"), "{msg}");
}

#[test]
fn lists_drop_empty_items() {
    assert_eq!(parse_list("ST, GK"), vec!["ST", "GK"]);
    assert_eq!(parse_list("ST,,GK, "), vec!["ST", "GK"]);
    assert!(parse_list(" , ").is_empty());
}

#[test]
fn position_and_league_lists_narrow_the_result() {
    assert_eq!(matched(&args(&["--positions", "ST,GK"])), vec!["A", "C", "D"]);
    assert_eq!(
        matched(&args(&["--positions=ST,GK", "--leagues=Premier League,Serie A"])),
        vec!["C", "D"]
    );
}

#[test]
fn no_flags_keep_the_scout_defaults() {
    let dataset = dataset();
    let criteria = build_criteria(&[], &dataset).expect("criteria build");

    assert_eq!(filter::apply(dataset.records(), &criteria).len(), 5);
    let age = criteria.range(NumericField::Age).expect("age range");
    assert_eq!((age.min, age.max), (19.0, 33.0));
    assert!(criteria.predicates().iter().any(|p| matches!(
        p,
        Predicate::OneOf { field: CategoricalField::League, allowed } if allowed.len() == 3
    )));
}

#[test]
fn seed_is_parsed_and_rejects_csv() {
    assert_eq!(demo_seed(&args(&["--json", "x.json"])).expect("no seed"), None);
    assert_eq!(demo_seed(&args(&["--seed=42"])).expect("seed"), Some(42));
    assert_eq!(
        demo_seed(&args(&["--demo", "--seed", "7"])).expect("seed"),
        Some(7)
    );

    let err = demo_seed(&args(&["--seed", "abc"])).unwrap_err();
    assert!(err.to_string().contains("--seed"));

    let err = demo_seed(&args(&["--csv", "players.csv", "--seed", "7"])).unwrap_err();
    assert!(err.to_string().contains("--csv"), "{err}");
}
