use tracing::trace;

/// Symmetric similarity score in `[0, 1]`, higher for closer strings.
pub type Similarity = fn(&str, &str) -> f64;

pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// Ranks dictionary entries as corrections for a misspelled word.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine {
    pub threshold: f64,
    pub similarity: Similarity,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            similarity: strsim::jaro_winkler,
        }
    }
}

impl SuggestionEngine {
    pub fn new(threshold: f64, similarity: Similarity) -> Self {
        Self {
            threshold,
            similarity,
        }
    }

    /// Generate suggestions for `input`, best first.
    ///
    /// Case-sensitive entries are scored as stored. Case-insensitive entries
    /// (stored lower-cased) are first projected onto the case profile of the
    /// input, so "WOR" is compared against "WORD" rather than "word". Ties
    /// are broken by ascending string order, and the same surface form may
    /// appear twice when both collections produce it.
    pub fn suggest<'a, S, I>(&self, input: &str, sensitive: S, insensitive: I) -> Vec<String>
    where
        S: IntoIterator<Item = &'a String>,
        I: IntoIterator<Item = &'a String>,
    {
        if input.trim().is_empty() {
            return Vec::new();
        }

        let profile = CaseProfile::of(input);
        let mut weights: Vec<(String, f64)> = Vec::new();

        for word in sensitive {
            self.consider(input, word.clone(), &mut weights);
        }

        for word in insensitive {
            self.consider(input, profile.apply(word), &mut weights);
        }

        weights.sort_by(|(a, a_score), (b, b_score)| b_score.total_cmp(a_score).then_with(|| a.cmp(b)));

        weights.into_iter().map(|(word, _)| word).collect()
    }

    fn consider(&self, input: &str, candidate: String, weights: &mut Vec<(String, f64)>) {
        let score = (self.similarity)(input, &candidate);

        if score >= self.threshold {
            trace!(input, candidate = candidate.as_str(), score, "suggestion candidate");
            weights.push((candidate, score));
        }
    }
}

/// Capitalization pattern of a query word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseProfile {
    Lower,
    Capitalized,
    /// Two or more uppercase letters anywhere in the word.
    Upper,
}

impl CaseProfile {
    pub fn of(word: &str) -> Self {
        if word.chars().filter(|c| c.is_uppercase()).take(2).count() >= 2 {
            CaseProfile::Upper
        } else if word.chars().next().is_some_and(char::is_uppercase) {
            CaseProfile::Capitalized
        } else {
            CaseProfile::Lower
        }
    }

    /// Recase a lower-case dictionary word to this profile.
    pub fn apply(self, word: &str) -> String {
        match self {
            CaseProfile::Upper => word.to_uppercase(),
            CaseProfile::Capitalized => capitalize(word),
            CaseProfile::Lower => word.to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
