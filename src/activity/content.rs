//! Hand-authored course content. Lesson data is static, compiled into the
//! binary, and never changes at runtime.

use crate::constants::PRACTICE_SESSION_SIZE;
use ahash::AHasher;
use chrono::{Datelike, NaiveDate};
use std::hash::Hasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    Translate,
    MultipleChoice,
    Listening,
}

#[derive(Debug)]
pub struct Exercise {
    pub kind: ExerciseKind,
    pub prompt: &'static str,
    pub answer: &'static str,
    /// Distractors for multiple-choice; empty otherwise.
    pub choices: &'static [&'static str],
    /// Multiplier fed into the XP formula.
    pub difficulty: f64,
}

#[derive(Debug)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub base_xp: i64,
    pub exercises: &'static [Exercise],
}

#[derive(Debug)]
pub struct CourseUnit {
    pub id: &'static str,
    pub title: &'static str,
    pub lessons: &'static [Lesson],
}

pub const COURSE: &[CourseUnit] = &[
    CourseUnit {
        id: "basics",
        title: "Basics",
        lessons: &[
            Lesson {
                id: "basics-greetings",
                title: "Greetings",
                base_xp: 10,
                exercises: &[
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "Hello",
                        answer: "Hola",
                        choices: &[],
                        difficulty: 1.0,
                    },
                    Exercise {
                        kind: ExerciseKind::MultipleChoice,
                        prompt: "Good morning",
                        answer: "Buenos días",
                        choices: &["Buenas noches", "Buenos días", "Hasta luego"],
                        difficulty: 1.0,
                    },
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "Goodbye",
                        answer: "Adiós",
                        choices: &[],
                        difficulty: 1.0,
                    },
                    Exercise {
                        kind: ExerciseKind::Listening,
                        prompt: "audio:hola-que-tal",
                        answer: "Hola, ¿qué tal?",
                        choices: &[],
                        difficulty: 1.2,
                    },
                ],
            },
            Lesson {
                id: "basics-people",
                title: "People",
                base_xp: 10,
                exercises: &[
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "The woman",
                        answer: "La mujer",
                        choices: &[],
                        difficulty: 1.0,
                    },
                    Exercise {
                        kind: ExerciseKind::MultipleChoice,
                        prompt: "The boy",
                        answer: "El niño",
                        choices: &["El niño", "La niña", "El hombre"],
                        difficulty: 1.0,
                    },
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "I am a student",
                        answer: "Soy estudiante",
                        choices: &[],
                        difficulty: 1.3,
                    },
                ],
            },
        ],
    },
    CourseUnit {
        id: "food",
        title: "Food",
        lessons: &[
            Lesson {
                id: "food-ordering",
                title: "Ordering",
                base_xp: 12,
                exercises: &[
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "I want water",
                        answer: "Quiero agua",
                        choices: &[],
                        difficulty: 1.0,
                    },
                    Exercise {
                        kind: ExerciseKind::MultipleChoice,
                        prompt: "The bill, please",
                        answer: "La cuenta, por favor",
                        choices: &["La cuenta, por favor", "La carta, por favor", "La mesa, por favor"],
                        difficulty: 1.1,
                    },
                    Exercise {
                        kind: ExerciseKind::Listening,
                        prompt: "audio:me-gusta-el-cafe",
                        answer: "Me gusta el café",
                        choices: &[],
                        difficulty: 1.2,
                    },
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "We eat bread",
                        answer: "Comemos pan",
                        choices: &[],
                        difficulty: 1.3,
                    },
                ],
            },
            Lesson {
                id: "food-market",
                title: "At the Market",
                base_xp: 12,
                exercises: &[
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "How much does it cost?",
                        answer: "¿Cuánto cuesta?",
                        choices: &[],
                        difficulty: 1.2,
                    },
                    Exercise {
                        kind: ExerciseKind::MultipleChoice,
                        prompt: "The apples are red",
                        answer: "Las manzanas son rojas",
                        choices: &[
                            "Las manzanas son rojas",
                            "Las naranjas son rojas",
                            "Las manzanas son verdes",
                        ],
                        difficulty: 1.2,
                    },
                    Exercise {
                        kind: ExerciseKind::Translate,
                        prompt: "A kilo of rice",
                        answer: "Un kilo de arroz",
                        choices: &[],
                        difficulty: 1.4,
                    },
                ],
            },
        ],
    },
];

/// Finds a lesson anywhere in the course by its id.
pub fn lesson_by_id(id: &str) -> Option<&'static Lesson> {
    COURSE
        .iter()
        .flat_map(|unit| unit.lessons.iter())
        .find(|lesson| lesson.id == id)
}

/// Every exercise in the course, in course order.
pub fn all_exercises() -> Vec<&'static Exercise> {
    COURSE
        .iter()
        .flat_map(|unit| unit.lessons.iter())
        .flat_map(|lesson| lesson.exercises.iter())
        .collect()
}

/// The review exercises for one player on one calendar day.
///
/// Stable deterministic shuffle: hash (user, date, position) and sort by
/// it, so the same player sees the same review set all day while
/// different players and different days get different mixes.
pub fn daily_review_rotation(user_id: &str, day: NaiveDate) -> Vec<&'static Exercise> {
    let mut pool: Vec<(usize, &'static Exercise)> =
        all_exercises().into_iter().enumerate().collect();

    pool.sort_by_key(|(position, _)| {
        let mut h = AHasher::default();
        h.write(user_id.as_bytes());
        h.write_i32(day.year());
        h.write_u32(day.ordinal());
        h.write_usize(*position);
        h.finish()
    });

    pool.truncate(PRACTICE_SESSION_SIZE);
    pool.into_iter().map(|(_, exercise)| exercise).collect()
}
