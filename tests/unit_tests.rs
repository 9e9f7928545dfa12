// Unit tests for Date Dash

use date_dash::core::{
    distance::haversine_distance,
    filters::{evaluate_place, filter_passing},
    random::SequenceSource,
    scoring::{calculate_weighted_score, PlaceScorer},
    selector::{select, Selector},
};
use date_dash::models::{Coordinate, Evaluation, FilterSet, Place, SelectionMode, SelectionPath};

fn create_test_place(id: &str, lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: format!("Place {}", id),
        address: "1 Test St, New York, NY".to_string(),
        coordinate: Coordinate::new(lat, lng),
        rating: Some(4.5),
        cuisine: vec![],
        theme: vec![],
        is_open_now: None,
        price_level: None,
        description: None,
        website: None,
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_haversine_distance_symmetric() {
    let pairs = [
        (Coordinate::new(40.7580, -73.9855), Coordinate::new(40.6782, -73.9442)),
        (Coordinate::new(-33.8688, 151.2093), Coordinate::new(51.5074, -0.1278)),
        (Coordinate::new(89.9, 0.0), Coordinate::new(-89.9, 180.0)),
        (Coordinate::new(0.0, -179.9), Coordinate::new(0.0, 179.9)),
    ];

    for (a, b) in pairs {
        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
        assert_eq!(haversine_distance(a, a), 0.0);
        assert!(haversine_distance(a, b) >= 0.0);
    }
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = Coordinate::new(40.7580, -73.9855);
    let brooklyn = Coordinate::new(40.6782, -73.9442);

    let distance = haversine_distance(manhattan, brooklyn);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_empty_filters_pass_everything() {
    let mut bare = create_test_place("bare", 0.0, 0.0);
    bare.rating = None;
    let places = vec![
        create_test_place("a", 40.7, -74.0),
        bare,
        create_test_place("c", -33.8, 151.2),
    ];
    let filters = FilterSet {
        radius_km: Some(0.0),
        ..FilterSet::default()
    };

    for place in &places {
        let evaluation = evaluate_place(place, &filters);
        assert!(evaluation.matches.rating);
        assert!(evaluation.matches.radius);
        assert!(evaluation.matches.cuisine);
        assert!(evaluation.matches.theme);
        assert!(evaluation.matches.open_now);
        assert!(evaluation.matches.price_level);
        assert!(evaluation.passes);
    }
    assert_eq!(filter_passing(&places, &filters).len(), 3);
}

#[test]
fn test_radius_boundary_is_inclusive() {
    let center = Coordinate::new(40.7128, -74.0060);
    let place = create_test_place("edge", 40.7400, -74.0060);
    let edge = haversine_distance(center, place.coordinate);

    let at_edge = FilterSet {
        center: Some(center),
        radius_km: Some(edge),
        ..FilterSet::default()
    };
    assert!(evaluate_place(&place, &at_edge).passes);

    let beyond = FilterSet {
        radius_km: Some(edge - 1e-9),
        ..at_edge.clone()
    };
    assert!(!evaluate_place(&place, &beyond).passes);
}

#[test]
fn test_nan_radius_is_no_constraint() {
    let place = create_test_place("far", -33.8, 151.2);
    let filters = FilterSet {
        center: Some(Coordinate::new(40.7128, -74.0060)),
        radius_km: Some(f64::NAN),
        ..FilterSet::default()
    };

    assert!(evaluate_place(&place, &filters).passes);
}

#[test]
fn test_tag_or_semantics() {
    let mut italian = create_test_place("italian", 40.7, -74.0);
    italian.cuisine = tags(&["italian"]);
    let mut thai = create_test_place("thai", 40.7, -74.0);
    thai.cuisine = tags(&["thai"]);

    let filters = FilterSet {
        cuisines: tags(&["italian", "french"]),
        ..FilterSet::default()
    };

    assert!(evaluate_place(&italian, &filters).matches.cuisine);
    assert!(!evaluate_place(&thai, &filters).matches.cuisine);
}

#[test]
fn test_score_is_deterministic() {
    let mut place = create_test_place("a", 40.72, -74.0);
    place.theme = tags(&["romantic", "rooftop"]);
    let filters = FilterSet {
        center: Some(Coordinate::new(40.7128, -74.0060)),
        radius_km: Some(5.0),
        themes: tags(&["romantic", "cozy"]),
        ..FilterSet::default()
    };

    let evaluation = evaluate_place(&place, &filters);
    let first = calculate_weighted_score(&evaluation, &filters);
    let second = calculate_weighted_score(&evaluate_place(&place, &filters), &filters);

    assert_eq!(first, second);
    assert!(first > 0.0 && first <= 1.0);
}

#[test]
fn test_no_match_terminal_case() {
    let places = vec![create_test_place("a", 40.7, -74.0), create_test_place("b", 40.7, -74.0)];
    let filters = FilterSet {
        min_rating: Some(5.0),
        ..FilterSet::default()
    };

    for mode in [SelectionMode::Random, SelectionMode::Weighted] {
        let result = select(&places, &filters, mode, &mut SequenceSource::constant(0.5));
        assert!(result.place.is_none());
        assert_eq!(result.debug.filtered_count, 0);
        assert_eq!(result.debug.path, SelectionPath::NoMatch);
        assert_eq!(result.debug.note, "No places matched the active filters.");
    }
}

#[test]
fn test_empty_candidate_list() {
    let result = select(
        &[],
        &FilterSet::default(),
        SelectionMode::Weighted,
        &mut SequenceSource::constant(0.5),
    );

    assert!(result.place.is_none());
    assert_eq!(result.debug.total_candidates, 0);
    assert!(result.debug.entries.is_empty());
}

struct ZeroScorer;

impl PlaceScorer for ZeroScorer {
    fn score(&self, _evaluation: &Evaluation<'_>, _filters: &FilterSet) -> f64 {
        0.0
    }
}

#[test]
fn test_weighted_zero_score_fallback() {
    let places = vec![create_test_place("a", 40.7, -74.0), create_test_place("b", 40.7, -74.0)];
    let selector = Selector::with_scorer(ZeroScorer);

    let result = selector.select(
        &places,
        &FilterSet::default(),
        SelectionMode::Weighted,
        &mut SequenceSource::constant(0.2),
    );

    assert_eq!(result.place.map(|p| p.id.as_str()), Some("a"));
    assert_eq!(result.debug.path, SelectionPath::WeightedZeroFallback { index: 0 });
    assert_eq!(result.debug.filtered_count, 2);
}

/// First candidate scores 3, every other candidate scores 1
struct FrontLoadedScorer;

impl PlaceScorer for FrontLoadedScorer {
    fn score(&self, evaluation: &Evaluation<'_>, _filters: &FilterSet) -> f64 {
        if evaluation.place.id == "first" {
            3.0
        } else {
            1.0
        }
    }
}

#[test]
fn test_deterministic_weighted_draw() {
    let places = vec![
        create_test_place("first", 40.7, -74.0),
        create_test_place("last", 40.7, -74.0),
    ];
    let selector = Selector::with_scorer(FrontLoadedScorer);

    let low = selector.select(
        &places,
        &FilterSet::default(),
        SelectionMode::Weighted,
        &mut SequenceSource::constant(0.0),
    );
    assert_eq!(low.place.map(|p| p.id.as_str()), Some("first"));
    assert_eq!(low.debug.path, SelectionPath::Weighted { total_score: 4.0 });
    assert_eq!(low.debug.entries[0].score, Some(3.0));

    let high = selector.select(
        &places,
        &FilterSet::default(),
        SelectionMode::Weighted,
        &mut SequenceSource::constant(1.0 - f64::EPSILON),
    );
    assert_eq!(high.place.map(|p| p.id.as_str()), Some("last"));
    assert_eq!(high.debug.path, SelectionPath::Weighted { total_score: 4.0 });
}

#[test]
fn test_nan_scores_fall_back_to_best() {
    struct NanScorer;

    impl PlaceScorer for NanScorer {
        fn score(&self, evaluation: &Evaluation<'_>, _filters: &FilterSet) -> f64 {
            if evaluation.place.id == "b" {
                2.0
            } else {
                f64::NAN
            }
        }
    }

    let places = vec![create_test_place("a", 40.7, -74.0), create_test_place("b", 40.7, -74.0)];
    let selector = Selector::with_scorer(NanScorer);

    let result = selector.select(
        &places,
        &FilterSet::default(),
        SelectionMode::Weighted,
        &mut SequenceSource::constant(0.5),
    );

    assert_eq!(result.place.map(|p| p.id.as_str()), Some("b"));
    assert_eq!(result.debug.path, SelectionPath::WeightedWalkFallback);
}

#[test]
fn test_cocktails_scenario() {
    let mut lounge = create_test_place("lounge", 40.7242, -74.0018);
    lounge.rating = Some(4.6);
    lounge.cuisine = tags(&["cocktails"]);
    let mut dance = create_test_place("dance", 40.7372, -74.0307);
    dance.rating = Some(4.9);
    dance.cuisine = tags(&["music"]);
    let places = vec![lounge, dance];

    let filters = FilterSet {
        cuisines: tags(&["cocktails"]),
        ..FilterSet::default()
    };

    let passing = filter_passing(&places, &filters);
    assert_eq!(passing.len(), 1);
    assert_eq!(passing[0].id, "lounge");

    for draw in [0.0, 0.5, 0.99] {
        let result = select(
            &places,
            &filters,
            SelectionMode::Random,
            &mut SequenceSource::constant(draw),
        );
        assert_eq!(result.place.map(|p| p.id.as_str()), Some("lounge"));
        assert_eq!(result.debug.path, SelectionPath::Random { index: 0 });
    }
}
