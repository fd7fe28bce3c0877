// Unit tests for Gigmatch

use gigmatch::core::{
    scoring::{calculate_candidate_score, ResolvedPreferences},
    suggest::{plan_suggestion, suggest, SuggestLimits, SuggestionPlan, Vocabulary},
    text::contains_ci,
    Matcher,
};
use gigmatch::models::{BudgetRange, CandidateItem, Preferences, ScoringWeights};

fn project(id: &str, skills: &[&str], budget: Option<f64>, category: Option<&str>) -> CandidateItem {
    CandidateItem {
        id: id.to_string(),
        title: format!("Project {}", id),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        budget,
        category: category.map(str::to_string),
        status: Some("open".to_string()),
    }
}

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn empty_corpus() -> Vec<Vec<String>> {
    Vec::new()
}

#[test]
fn test_contains_ci_is_shared_primitive() {
    assert!(contains_ci("Node.js", "NODE"));
    assert!(!contains_ci("Node", "Node.js"));
}

#[test]
fn test_exact_beats_partial_by_at_least_ten() {
    let weights = ScoringWeights::default();
    let prefs = ResolvedPreferences::default();
    let user = skills(&["Java"]);

    let exact = calculate_candidate_score(&user, &prefs, &project("a", &["java"], None, None), &weights);
    let partial = calculate_candidate_score(&user, &prefs, &project("b", &["JavaScript"], None, None), &weights);

    assert_eq!(exact, 10);
    assert_eq!(partial, 5);
    assert!(exact >= partial + 5);

    let none = calculate_candidate_score(&user, &prefs, &project("c", &["Rust"], None, None), &weights);
    assert!(exact >= none + 10);
}

#[test]
fn test_budget_example() {
    let weights = ScoringWeights::default();
    let prefs = ResolvedPreferences {
        budget: Some(BudgetRange::parse("100-500")),
        category: None,
    };
    let user = skills(&["Go"]);

    let inside = calculate_candidate_score(&user, &prefs, &project("in", &["Go"], Some(300.0), None), &weights);
    let outside = calculate_candidate_score(&user, &prefs, &project("out", &["Go"], Some(1000.0), None), &weights);
    let missing = calculate_candidate_score(&user, &prefs, &project("none", &["Go"], None, None), &weights);

    assert_eq!(inside, 15);
    assert_eq!(outside, 10);
    assert_eq!(missing, 10);
}

#[test]
fn test_malformed_budget_range_is_unbounded() {
    let matcher = Matcher::with_default_weights();
    let pool = vec![project("1", &["Go"], Some(50_000.0), None)];
    let preferences = Preferences {
        budget_range: Some("lots-".to_string()),
        category: None,
    };

    let ranked = matcher.rank(&skills(&["Go"]), &preferences, &pool);
    assert_eq!(ranked[0].score, 15);
}

#[test]
fn test_score_monotone_in_matching_skills() {
    let matcher = Matcher::with_default_weights();
    let pool = vec![project("1", &["Rust", "Go", "Kubernetes"], None, None)];

    let one = matcher.rank(&skills(&["Rust"]), &Preferences::default(), &pool)[0].score;
    let two = matcher.rank(&skills(&["Rust", "Go"]), &Preferences::default(), &pool)[0].score;
    let three = matcher.rank(&skills(&["Rust", "Go", "Kube"]), &Preferences::default(), &pool)[0].score;

    assert!(one < two);
    assert!(two < three);
}

#[test]
fn test_short_queries_are_empty() {
    let vocab = Vocabulary::default();
    let corpus = vec![skills(&["ab", "a", "abc"])];

    for query in ["", "a", " ", " b "] {
        assert!(suggest(query, &vocab, &corpus, &SuggestLimits::default()).skills.is_empty());
    }
}

#[test]
fn test_sufficient_vocabulary_ignores_corpus() {
    let vocab = Vocabulary::default();
    let limits = SuggestLimits::default();
    let noisy = vec![skills(&["Scripting"]), skills(&["Prompt Engineering"])];

    // "ing" hits well over ten curated terms
    let without = suggest("ing", &vocab, &empty_corpus(), &limits);
    let with = suggest("ing", &vocab, &noisy, &limits);

    assert_eq!(without.skills.len(), 10);
    assert_eq!(without, with);
    assert!(!with.skills.contains(&"Prompt Engineering".to_string()));
}

#[test]
fn test_plan_is_ready_when_vocabulary_suffices() {
    let vocab = Vocabulary::new(["Rust", "Rust Async", "Rust Embedded", "Rust WASM", "Rust CLI"]);
    assert!(matches!(
        plan_suggestion("rust", &vocab, &SuggestLimits::default()),
        SuggestionPlan::Ready(_)
    ));
    assert!(matches!(
        plan_suggestion("wasm", &vocab, &SuggestLimits::default()),
        SuggestionPlan::NeedsCorpus(_)
    ));
}

#[test]
fn test_corpus_matches_precede_vocabulary() {
    let vocab = Vocabulary::new(["Elixir", "Erlang"]);
    let corpus = vec![skills(&["Phoenix", "elixir"]), skills(&["Elixir LiveView"])];

    let result = suggest("elix", &vocab, &corpus, &SuggestLimits::default());

    assert_eq!(result.skills, vec!["elixir", "Elixir LiveView"]);
}
