// Criterion benchmarks for Gigmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gigmatch::core::{suggest, Matcher, SuggestLimits, Vocabulary};
use gigmatch::models::{CandidateItem, Preferences};

const SKILLS: &[&str] = &[
    "React", "Node.js", "TypeScript", "Python", "Django", "AWS", "Docker", "Figma", "SEO", "Flutter",
    "Kotlin", "Swift", "GraphQL", "PostgreSQL", "Solidity",
];
const CATEGORIES: &[&str] = &["Web Development", "Mobile Apps", "Design", "Marketing", "Data Science"];

fn create_candidate(id: usize) -> CandidateItem {
    CandidateItem {
        id: id.to_string(),
        title: format!("Project {}", id),
        skills: (0..3).map(|k| SKILLS[(id + k * 7) % SKILLS.len()].to_string()).collect(),
        budget: Some(((id * 137) % 10_000) as f64),
        category: Some(CATEGORIES[id % CATEGORIES.len()].to_string()),
        status: Some("open".to_string()),
    }
}

fn user_skills() -> Vec<String> {
    vec!["react".to_string(), "Node".to_string(), "Docker".to_string()]
}

fn create_preferences() -> Preferences {
    Preferences {
        budget_range: Some("1000-5000".to_string()),
        category: Some("Web Development".to_string()),
    }
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let skills = user_skills();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("recommend");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let pool: Vec<CandidateItem> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("score_and_recommend", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.score_and_recommend(
                        black_box(&skills),
                        black_box(&preferences),
                        black_box(&pool),
                    )
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("rank", candidate_count), candidate_count, |b, _| {
            b.iter(|| matcher.rank(black_box(&skills), black_box(&preferences), black_box(&pool)));
        });
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let vocabulary = Vocabulary::default();
    let limits = SuggestLimits::default();
    let corpus: Vec<Vec<String>> = (0..100).map(|i| create_candidate(i).skills).collect();

    c.bench_function("suggest_vocabulary_short_circuit", |b| {
        b.iter(|| suggest(black_box("ing"), &vocabulary, &corpus, &limits));
    });

    c.bench_function("suggest_with_corpus_100", |b| {
        b.iter(|| suggest(black_box("re"), &vocabulary, &corpus, &limits));
    });
}

criterion_group!(benches, bench_recommend, bench_suggest);

criterion_main!(benches);
