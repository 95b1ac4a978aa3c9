use exam_core::time::fixed_now;
use exam_core::{AggregateStats, Domain, DomainScore, TopicStats};
use storage::{JsonStatsStore, StatsRepository, StorageError, STORAGE_KEY};

fn sample_stats() -> AggregateStats {
    let mut stats = AggregateStats::new();
    stats.total_questions_answered = 12;
    stats.correct_answers = 9;
    stats.xp = 170;
    stats.streak = 3;
    stats.recent_scores = vec![83, 66];
    stats.domain_performance.insert(
        Domain::AccessibilityUniversalDesign,
        DomainScore {
            correct: 4,
            total: 5,
        },
    );
    stats.topic_performance.insert(
        "Universal Design".to_owned(),
        TopicStats {
            correct: 4,
            total: 5,
            last_tested: fixed_now(),
            interval: 16,
        },
    );
    stats
}

#[test]
fn round_trips_the_record_under_the_fixed_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStatsStore::new(dir.path());

    assert!(store.load().unwrap().is_none());

    let stats = sample_stats();
    store.save(&stats).unwrap();

    assert_eq!(
        store.path().file_name().unwrap().to_str().unwrap(),
        format!("{STORAGE_KEY}.json")
    );
    assert_eq!(store.load().unwrap().unwrap(), stats);
}

#[test]
fn save_creates_the_profile_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStatsStore::new(dir.path().join("profiles").join("default"));

    store.save(&AggregateStats::new()).unwrap();
    assert_eq!(store.load().unwrap().unwrap(), AggregateStats::new());
}

#[test]
fn last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStatsStore::new(dir.path());

    store.save(&AggregateStats::new()).unwrap();
    let stats = sample_stats();
    store.save(&stats).unwrap();

    assert_eq!(store.load().unwrap().unwrap(), stats);
}

#[test]
fn malformed_record_surfaces_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStatsStore::new(dir.path());

    std::fs::write(store.path(), "{ not valid json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[test]
fn clear_removes_the_record_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStatsStore::new(dir.path());

    store.clear().unwrap();

    store.save(&sample_stats()).unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}
