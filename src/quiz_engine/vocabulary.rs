//! Immutable word list with read-only sampling.
//!
//! The built-in list is the Polish "family members" set: prompts are Russian,
//! answers are Polish, and the auxiliary field holds an English gloss.

use std::collections::HashSet;

use rand::Rng;

use crate::quiz_engine::{error::QuizError, models::VocabularyEntry, shuffle};

/// (prompt, answer, auxiliary)
const FAMILY_WORDS: [(&str, &str, &str); 31] = [
    ("мама",                "matka",        "mother"),
    ("папа",                "ojciec",       "father"),
    ("родители",            "rodzice",      "parents"),
    ("сестра",              "siostra",      "sister"),
    ("брат",                "brat",         "brother"),
    ("братья и сёстры",     "rodzeństwo",   "siblings"),
    ("бабушка",             "babcia",       "grandmother"),
    ("дедушка",             "dziadek",      "grandfather"),
    ("бабушка и дедушка",   "dziadkowie",   "grandparents"),
    ("тётя",                "ciocia",       "aunt"),
    ("дядя",                "wujek",        "uncle"),
    ("двоюродный брат",     "kuzyn",        "cousin (m)"),
    ("двоюродная сестра",   "kuzynka",      "cousin (f)"),
    ("дочь",                "córka",        "daughter"),
    ("сын",                 "syn",          "son"),
    ("дети",                "dzieci",       "children"),
    ("жена",                "żona",         "wife"),
    ("муж",                 "mąż",          "husband"),
    ("семья",               "rodzina",      "family"),
    ("родственник (м)",     "krewny",       "relative (m)"),
    ("родственница (ж)",    "krewna",       "relative (f)"),
    ("племянница",          "siostrzenica", "niece"),
    ("племянник",           "bratanek",     "nephew"),
    ("тёща / свекровь",     "teściowa",     "mother-in-law"),
    ("тёсть / свёкор",      "teść",         "father-in-law"),
    ("шурин / деверь",      "szwagier",     "brother-in-law"),
    ("золовка / невестка",  "szwagierka",   "sister-in-law"),
    ("внук",                "wnuk",         "grandson"),
    ("внучка",              "wnuczka",      "granddaughter"),
    ("прабабушка",          "prababcia",    "great-grandmother"),
    ("прадедушка",          "pradziadek",   "great-grandfather"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    /// # Errors
    ///
    /// `EmptyVocabulary` for an empty list, `DuplicateAnswer` when two
    /// entries share an answer string.
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, QuizError> {
        if entries.is_empty() {
            return Err(QuizError::EmptyVocabulary);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.answer.as_str()) {
                return Err(QuizError::DuplicateAnswer(entry.answer.clone()));
            }
        }
        Ok(VocabularyStore { entries })
    }

    /// The compiled-in family-members list.
    pub fn builtin() -> Self {
        let entries = FAMILY_WORDS
            .iter()
            .map(|&(prompt, answer, aux)| VocabularyEntry::new(prompt, answer).with_auxiliary(aux))
            .collect();
        VocabularyStore { entries }
    }

    /// Load a JSON array of `{ "prompt", "answer", "auxiliary"? }` records.
    ///
    /// # Errors
    ///
    /// `Json` on malformed input, otherwise the same checks as [`Self::new`].
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let entries: Vec<VocabularyEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Full list in canonical order. Returns a copy.
    pub fn all(&self) -> Vec<VocabularyEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_answer(&self, answer: &str) -> bool {
        self.entries.iter().any(|e| e.answer == answer)
    }

    /// Number of entries whose answer differs from `exclude_answer`.
    pub fn eligible_count(&self, exclude_answer: &str) -> usize {
        self.entries.iter().filter(|e| e.answer != exclude_answer).count()
    }

    /// Draw `count` distinct entries, none answering `exclude_answer`.
    ///
    /// # Errors
    ///
    /// `InsufficientVocabulary` when fewer than `count` entries qualify.
    pub fn sample_excluding<R: Rng>(
        &self,
        exclude_answer: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<VocabularyEntry>, QuizError> {
        let pool: Vec<VocabularyEntry> = self
            .entries
            .iter()
            .filter(|e| e.answer != exclude_answer)
            .cloned()
            .collect();
        if pool.len() < count {
            return Err(QuizError::InsufficientVocabulary {
                requested: count,
                available: pool.len(),
            });
        }
        Ok(shuffle::sample(pool, count, rng))
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::builtin()
    }
}
