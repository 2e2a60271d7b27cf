//! Deterministic interview question generation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::catalog::{difficulty_label, templates_for};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(domain|role|difficulty)\}").unwrap());

/// A single generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `q-<n>`, 1-based within its session.
    pub id: String,
    pub text: String,
}

/// Generate `count` questions for the given interview parameters.
///
/// Templates for `role` are reused cyclically when `count` exceeds the list
/// length. The output depends only on the inputs.
pub fn generate(domain: &str, role: &str, difficulty: &str, count: usize) -> Vec<Question> {
    let templates = templates_for(role);
    let label = difficulty_label(difficulty);

    (0..count)
        .map(|k| {
            let template = templates[k % templates.len()];
            let rendered = render(template, domain, role, &label);
            Question {
                id: format!("q-{}", k + 1),
                text: format!("[{}] {}", label, rendered),
            }
        })
        .collect()
}

/// Fill placeholders in a single pass; substituted text is not re-scanned.
fn render(template: &str, domain: &str, role: &str, difficulty: &str) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures| match &caps[1] {
            "domain" => domain.to_string(),
            "role" => role.to_string(),
            _ => difficulty.to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_TEMPLATES;

    mod generate {
        use super::*;

        #[test]
        fn returns_requested_count_with_sequential_ids() {
            for count in 1..=20 {
                let questions = generate("fintech", "Backend Engineer", "Hard", count);
                assert_eq!(questions.len(), count);
                for (i, q) in questions.iter().enumerate() {
                    assert_eq!(q.id, format!("q-{}", i + 1));
                }
            }
        }

        #[test]
        fn zero_count_is_empty() {
            assert!(generate("fintech", "Backend Engineer", "Hard", 0).is_empty());
        }

        #[test]
        fn prefixes_text_with_label() {
            let questions = generate("fintech", "Backend Engineer", "Hard", 3);
            assert!(questions.iter().all(|q| q.text.starts_with("[Advanced] ")));
        }

        #[test]
        fn renders_backend_template() {
            let questions = generate("fintech", "Backend Engineer", "Hard", 1);
            assert_eq!(
                questions[0].text,
                "[Advanced] Design a Advanced level API in the fintech domain that can scale to millions of users."
            );
        }

        #[test]
        fn unknown_role_uses_default_templates() {
            let questions = generate("health", "Data Scientist", "Easy", 4);
            assert_eq!(questions.len(), 4);
            assert_eq!(
                questions[1].text,
                "[Foundational] How would you mentor a new Data Scientist joining the team?"
            );
            assert_eq!(questions[3].text, questions[0].text);
            assert_ne!(questions[3].id, questions[0].id);
        }

        #[test]
        fn cycles_templates_in_order() {
            let count = 8;
            let questions = generate("retail", "Frontend Engineer", "Medium", count);
            let len = templates_for("Frontend Engineer").len();
            for k in len..count {
                assert_eq!(questions[k].text, questions[k % len].text);
            }
        }

        #[test]
        fn fewer_than_template_count_takes_prefix() {
            let questions = generate("retail", "Unknown", "Medium", 2);
            assert_eq!(questions.len(), 2);
            assert!(questions[0].text.contains("challenging project from the retail space"));
        }

        #[test]
        fn unknown_difficulty_is_title_cased() {
            let questions = generate("ai", "Backend Engineer", "expert", 1);
            assert!(questions[0].text.starts_with("[Expert] Design a Expert level API"));
        }

        #[test]
        fn is_deterministic() {
            let a = generate("fintech", "DevOps Engineer", "Medium", 7);
            let b = generate("fintech", "DevOps Engineer", "Medium", 7);
            assert_eq!(a, b);
        }
    }

    mod render {
        use super::*;

        #[test]
        fn substitutes_every_placeholder() {
            let out = render("{role} in {domain} at {difficulty}", "games", "SRE", "Core");
            assert_eq!(out, "SRE in games at Core");
        }

        #[test]
        fn does_not_rescan_substituted_values() {
            let out = render(DEFAULT_TEMPLATES[1], "x", "{domain}", "Core");
            assert_eq!(out, "How would you mentor a new {domain} joining the team?");
        }

        #[test]
        fn leaves_unknown_braces_alone() {
            let out = render("{other} {domain}", "web", "r", "d");
            assert_eq!(out, "{other} web");
        }
    }

    #[test]
    fn question_serializes_as_id_and_text() {
        let q = Question {
            id: "q-1".to_string(),
            text: "Hello".to_string(),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json, serde_json::json!({"id": "q-1", "text": "Hello"}));
    }
}
