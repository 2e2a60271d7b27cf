//! Static question templates and difficulty labels.
//!
//! Templates are plain strings with `{domain}`, `{role}` and `{difficulty}`
//! placeholders. They are filled in by [`crate::generator`].

use std::borrow::Cow;

/// Role-specific template lists, in declaration order.
const ROLE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "Backend Engineer",
        &[
            "Design a {difficulty} level API in the {domain} domain that can scale to millions of users.",
            "How would you model a data store to support {role} workloads in the {domain} space?",
            "Walk me through debugging a production issue in a distributed {domain} service you own.",
        ],
    ),
    (
        "Frontend Engineer",
        &[
            "How do you ensure accessibility for a {domain} dashboard aimed at {role}s?",
            "Describe your approach to state management for an interactive {domain} application.",
            "What patterns keep a design system maintainable as {difficulty} requirements grow?",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "Outline a CI/CD pipeline for deploying {domain} microservices with {difficulty} compliance needs.",
            "How would you monitor and alert on critical {domain} workloads?",
            "Describe an incident where automation improved a {role} process in the {domain} domain.",
        ],
    ),
    (
        "FullStack Developer",
        &[
            "Propose an end-to-end architecture for a {domain} feature, highlighting {role} trade-offs.",
            "How do you keep API contracts resilient when both frontend and backend evolve?",
            "What testing strategy ensures {difficulty} coverage across the stack?",
        ],
    ),
];

/// Used for any role missing from [`ROLE_TEMPLATES`].
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "Explain a challenging project from the {domain} space and what made it {difficulty}.",
    "How would you mentor a new {role} joining the team?",
    "What metrics tell you an initiative in {domain} is succeeding?",
];

const DIFFICULTY_LABELS: &[(&str, &str)] = &[
    ("Easy", "Foundational"),
    ("Medium", "Core"),
    ("Hard", "Advanced"),
];

/// Return the template list for a role, falling back to [`DEFAULT_TEMPLATES`].
///
/// The returned slice is never empty.
pub fn templates_for(role: &str) -> &'static [&'static str] {
    ROLE_TEMPLATES
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, templates)| *templates)
        .unwrap_or(DEFAULT_TEMPLATES)
}

/// Normalize a raw difficulty into its display label.
///
/// Known difficulties map through the label table (exact match). Anything else
/// is title-cased, e.g. `"very hard"` becomes `"Very Hard"`.
pub fn difficulty_label(difficulty: &str) -> Cow<'static, str> {
    DIFFICULTY_LABELS
        .iter()
        .find(|(raw, _)| *raw == difficulty)
        .map(|(_, label)| Cow::Borrowed(*label))
        .unwrap_or_else(|| Cow::Owned(title_case(difficulty)))
}

/// Roles that have dedicated templates.
pub fn known_roles() -> impl Iterator<Item = &'static str> {
    ROLE_TEMPLATES.iter().map(|(name, _)| *name)
}

/// Difficulties with a dedicated label, as `(raw, label)` pairs.
pub fn known_difficulties() -> impl Iterator<Item = (&'static str, &'static str)> {
    DIFFICULTY_LABELS.iter().copied()
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    mod templates {
        use super::*;

        #[test]
        fn known_role_uses_its_own_list() {
            let templates = templates_for("DevOps Engineer");
            assert_eq!(templates.len(), 3);
            assert!(templates[0].starts_with("Outline a CI/CD pipeline"));
        }

        #[test]
        fn unknown_role_falls_back_to_default() {
            assert_eq!(templates_for("Data Scientist"), DEFAULT_TEMPLATES);
        }

        #[test]
        fn role_lookup_is_case_sensitive() {
            assert_eq!(templates_for("backend engineer"), DEFAULT_TEMPLATES);
        }

        #[test]
        fn every_list_is_non_empty() {
            assert!(!DEFAULT_TEMPLATES.is_empty());
            for role in known_roles() {
                assert!(!templates_for(role).is_empty(), "{role} has no templates");
            }
        }

        #[test]
        fn known_roles_in_declaration_order() {
            let roles: Vec<_> = known_roles().collect();
            assert_eq!(
                roles,
                vec![
                    "Backend Engineer",
                    "Frontend Engineer",
                    "DevOps Engineer",
                    "FullStack Developer",
                ]
            );
        }
    }

    mod labels {
        use super::*;

        #[test]
        fn table_hits() {
            assert_eq!(difficulty_label("Easy"), "Foundational");
            assert_eq!(difficulty_label("Medium"), "Core");
            assert_eq!(difficulty_label("Hard"), "Advanced");
        }

        #[test]
        fn table_hit_is_borrowed() {
            assert!(matches!(difficulty_label("Hard"), Cow::Borrowed(_)));
        }

        #[test]
        fn miss_is_title_cased() {
            assert_eq!(difficulty_label("hard"), "Hard");
            assert_eq!(difficulty_label("very hard"), "Very Hard");
            assert_eq!(difficulty_label("EXPERT"), "Expert");
        }

        #[test]
        fn title_case_restarts_after_non_letters() {
            assert_eq!(title_case("HARD-core"), "Hard-Core");
            assert_eq!(title_case("level2boss"), "Level2Boss");
        }

        #[test]
        fn title_case_empty() {
            assert_eq!(difficulty_label(""), "");
        }

        #[test]
        fn known_difficulties_pairs() {
            let pairs: Vec<_> = known_difficulties().collect();
            assert_eq!(pairs.len(), 3);
            assert_eq!(pairs[2], ("Hard", "Advanced"));
        }
    }
}
