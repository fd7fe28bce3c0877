use serde::{Deserialize, Serialize};

use crate::core::text::{contains_ci, CiSet};

/// Curated skill list shipped with the service
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Vue.js", "Angular", "Node.js", "Python", "Django",
    "Flask", "Java", "Spring Boot", "C#", ".NET Core", "PHP", "Laravel", "WordPress", "Ruby",
    "Ruby on Rails", "Swift", "Kotlin", "Flutter", "React Native", "AWS", "Azure",
    "Google Cloud", "Docker", "Kubernetes", "GraphQL", "REST API", "SQL", "PostgreSQL", "MySQL",
    "MongoDB", "Firebase", "Redis", "HTML", "CSS", "Sass", "TailwindCSS", "Bootstrap",
    "Material UI", "UI/UX Design", "Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator",
    "SEO", "DevOps", "CI/CD", "Git", "GitHub", "Agile", "Scrum", "Project Management",
    "Content Writing", "Technical Writing", "Data Science", "Machine Learning",
    "Artificial Intelligence", "Natural Language Processing", "Computer Vision",
    "Data Analysis", "Data Visualization", "Power BI", "Tableau", "Blockchain",
    "Smart Contracts", "Solidity", "Ethereum", "iOS Development", "Android Development",
    "Game Development", "Unity", "Unreal Engine", "VR/AR Development", "3D Modeling",
    "Animation", "Video Editing", "Digital Marketing", "Social Media Marketing",
    "Email Marketing", "Content Marketing", "Marketing Strategy", "E-commerce", "Shopify",
    "WooCommerce", "Magento", "Cybersecurity", "Penetration Testing", "Network Security",
    "Quality Assurance", "Automated Testing", "Manual Testing", "Responsive Design",
    "Cross-browser Compatibility",
];

/// Ordered list of canonical terms, free of case-insensitive duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = CiSet::new();
        for term in terms {
            let term = term.as_ref().trim();
            if !term.is_empty() {
                set.insert(term);
            }
        }
        Self { terms: set.into_vec() }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_VOCABULARY.iter().copied())
    }
}

/// Suggestion thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestLimits {
    /// Shortest trimmed query that yields suggestions
    pub min_query_len: usize,
    /// Maximum number of suggestions returned
    pub limit: usize,
    /// Vocabulary matches that make the corpus unnecessary
    pub sufficient_matches: usize,
}

impl Default for SuggestLimits {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            limit: 10,
            sufficient_matches: 5,
        }
    }
}

/// Suggested terms, as returned to the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub skills: Vec<String>,
}

/// Outcome of the vocabulary pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionPlan {
    /// The vocabulary answered on its own (or the query was too short)
    Ready(SuggestionResult),
    /// Too few curated matches; the tag corpus should be consulted
    NeedsCorpus(PendingSuggestion),
}

/// Vocabulary matches waiting for corpus tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSuggestion {
    query: String,
    vocabulary_matches: Vec<String>,
    limit: usize,
}

impl PendingSuggestion {
    /// Merge corpus tags (first) with the vocabulary matches
    pub fn with_corpus<T: AsRef<[String]>>(self, corpus: &[T]) -> SuggestionResult {
        let mut merged = CiSet::new();

        for tag in corpus.iter().flat_map(|tags| tags.as_ref().iter()) {
            if contains_ci(tag, &self.query) {
                merged.insert(tag);
            }
        }
        for term in &self.vocabulary_matches {
            merged.insert(term);
        }

        SuggestionResult {
            skills: merged.iter().take(self.limit).map(str::to_string).collect(),
        }
    }

    /// Answer from the vocabulary alone, e.g. when the corpus fetch failed
    pub fn vocabulary_only(self) -> SuggestionResult {
        SuggestionResult {
            skills: self.vocabulary_matches,
        }
    }
}

/// Run the vocabulary pass and decide whether the corpus is needed
pub fn plan_suggestion(query: &str, vocabulary: &Vocabulary, limits: &SuggestLimits) -> SuggestionPlan {
    if query.trim().chars().count() < limits.min_query_len {
        return SuggestionPlan::Ready(SuggestionResult::default());
    }

    let vocabulary_matches: Vec<String> = vocabulary
        .terms()
        .iter()
        .filter(|term| contains_ci(term, query))
        .take(limits.limit)
        .cloned()
        .collect();

    // curated matches take precedence once there are enough of them
    if vocabulary_matches.len() >= limits.sufficient_matches {
        return SuggestionPlan::Ready(SuggestionResult {
            skills: vocabulary_matches,
        });
    }

    SuggestionPlan::NeedsCorpus(PendingSuggestion {
        query: query.to_string(),
        vocabulary_matches,
        limit: limits.limit,
    })
}

/// Suggest terms for a partial query from the vocabulary and a tag corpus
pub fn suggest<T: AsRef<[String]>>(
    query: &str,
    vocabulary: &Vocabulary,
    corpus: &[T],
    limits: &SuggestLimits,
) -> SuggestionResult {
    match plan_suggestion(query, vocabulary, limits) {
        SuggestionPlan::Ready(result) => result,
        SuggestionPlan::NeedsCorpus(pending) => pending.with_corpus(corpus),
    }
}
