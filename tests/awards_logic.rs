use linguaquest::progression::PlayerSnapshot;
use linguaquest::progression::awards::{
    ACHIEVEMENTS, BADGES, award_by_id, find_newly_earned,
};

fn snapshot() -> PlayerSnapshot {
    PlayerSnapshot {
        xp: 0,
        level: 1,
        rank: "Bronze".to_string(),
        current_streak: 0,
        longest_streak: 0,
        accuracy: 0.0,
        lessons_completed: 0,
        challenges_completed: 0,
        perfect_lessons: 0,
        coins_earned: 0,
    }
}

#[test]
fn first_lesson_earns_the_first_badge_only() {
    let mut snap = snapshot();
    snap.lessons_completed = 1;

    let earned = find_newly_earned(BADGES, &[], &snap);
    let ids: Vec<&str> = earned.iter().map(|def| def.id).collect();
    assert!(ids.contains(&"first-steps"));
    assert!(!ids.contains(&"word-collector"));
}

#[test]
fn evaluation_is_idempotent_once_ids_are_persisted() {
    let mut snap = snapshot();
    snap.lessons_completed = 12;
    snap.current_streak = 7;

    let first_pass = find_newly_earned(BADGES, &[], &snap);
    assert!(!first_pass.is_empty());

    let unlocked: Vec<String> = first_pass.iter().map(|def| def.id.to_string()).collect();
    let second_pass = find_newly_earned(BADGES, &unlocked, &snap);
    assert!(second_pass.is_empty(), "unchanged profile must earn nothing new");
}

#[test]
fn simultaneous_unlocks_are_all_reported() {
    let mut snap = snapshot();
    snap.lessons_completed = 10;
    snap.current_streak = 7;

    let ids: Vec<&str> = find_newly_earned(BADGES, &[], &snap)
        .iter()
        .map(|def| def.id)
        .collect();
    for expected in ["first-steps", "word-collector", "kindling", "week-of-fire"] {
        assert!(ids.contains(&expected), "missing {expected}");
    }
}

#[test]
fn thresholds_qualify_at_equality() {
    let mut snap = snapshot();
    snap.current_streak = 3;

    let ids: Vec<&str> = find_newly_earned(BADGES, &[], &snap)
        .iter()
        .map(|def| def.id)
        .collect();
    assert!(ids.contains(&"kindling"));
}

#[test]
fn level_gates_use_the_resolved_level_not_the_cached_field() {
    // 700 XP resolves to level 5 even though the cached field still says 1.
    let mut snap = snapshot();
    snap.xp = 700;
    snap.level = 1;

    let ids: Vec<&str> = find_newly_earned(ACHIEVEMENTS, &[], &snap)
        .iter()
        .map(|def| def.id)
        .collect();
    assert!(ids.contains(&"rising-star"));
}

#[test]
fn partial_unlock_sets_are_respected() {
    let mut snap = snapshot();
    snap.lessons_completed = 10;

    let already = vec!["first-steps".to_string()];
    let ids: Vec<&str> = find_newly_earned(BADGES, &already, &snap)
        .iter()
        .map(|def| def.id)
        .collect();
    assert!(!ids.contains(&"first-steps"));
    assert!(ids.contains(&"word-collector"));
}

#[test]
fn definition_tables_are_coherent() {
    let mut ids = Vec::new();
    for def in BADGES.iter().chain(ACHIEVEMENTS.iter()) {
        assert!(!ids.contains(&def.id), "duplicate award id {}", def.id);
        ids.push(def.id);
        assert!(def.reward.coins >= 0);
        assert!(def.reward.tickets >= 0);
        assert!(!def.name.is_empty());
        assert!(!def.description.is_empty());
    }
}

#[test]
fn lookup_spans_both_tables() {
    assert_eq!(award_by_id("week-of-fire").unwrap().name, "Week of Fire");
    assert_eq!(award_by_id("gladiator").unwrap().name, "Gladiator");
    assert!(award_by_id("no-such-award").is_none());
}
