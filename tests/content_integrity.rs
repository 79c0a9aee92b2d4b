use chrono::NaiveDate;
use linguaquest::activity::content::{
    COURSE, ExerciseKind, all_exercises, daily_review_rotation, lesson_by_id,
};
use linguaquest::constants::PRACTICE_SESSION_SIZE;

#[test]
fn every_lesson_has_exercises_and_a_unique_id() {
    let mut seen = Vec::new();
    for unit in COURSE {
        assert!(!unit.lessons.is_empty(), "empty unit {}", unit.id);
        for lesson in unit.lessons {
            assert!(!seen.contains(&lesson.id), "duplicate lesson id {}", lesson.id);
            seen.push(lesson.id);
            assert!(!lesson.exercises.is_empty(), "empty lesson {}", lesson.id);
            assert!(lesson.base_xp > 0);
        }
    }
}

#[test]
fn multiple_choice_answers_are_among_the_choices() {
    for exercise in all_exercises() {
        assert!(exercise.difficulty > 0.0);
        if exercise.kind == ExerciseKind::MultipleChoice {
            assert!(
                exercise.choices.contains(&exercise.answer),
                "answer missing from choices for {}",
                exercise.prompt
            );
        } else {
            assert!(exercise.choices.is_empty());
        }
    }
}

#[test]
fn lesson_lookup_finds_known_ids_only() {
    assert_eq!(lesson_by_id("basics-greetings").unwrap().title, "Greetings");
    assert!(lesson_by_id("advanced-quantum-grammar").is_none());
}

#[test]
fn daily_rotation_is_stable_for_a_user_and_day() {
    let day = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
    let first = daily_review_rotation("user-a", day);
    let second = daily_review_rotation("user-a", day);

    assert_eq!(first.len(), second.len());
    assert!(first.len() <= PRACTICE_SESSION_SIZE);
    for (a, b) in first.iter().zip(second.iter()) {
        assert!(std::ptr::eq(*a, *b), "rotation order changed within a day");
    }
}

#[test]
fn daily_rotation_draws_from_the_course() {
    let day = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
    let pool = all_exercises();
    for exercise in daily_review_rotation("user-b", day) {
        assert!(pool.iter().any(|candidate| std::ptr::eq(*candidate, exercise)));
    }
}
