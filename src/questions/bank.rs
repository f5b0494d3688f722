//! Built-in technical question bank.
//!
//! Immutable after construction and shared read-only across sessions, so a
//! single `Arc<QuestionBank>` serves any number of parallel conversations
//! without locking.

use std::collections::HashMap;

/// Predefined questions per technology. Keys are stored lower-case.
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "Explain the difference between a list and a tuple in Python.",
            "How would you handle exceptions in Python?",
            "What are decorators in Python and how do they work?",
            "Explain list comprehensions and provide an example.",
            "How does memory management work in Python?",
        ],
    ),
    (
        "javascript",
        &[
            "What's the difference between '==' and '===' in JavaScript?",
            "Explain closures in JavaScript with an example.",
            "How does prototypal inheritance work?",
            "What are Promises and how do they differ from callbacks?",
            "Explain event delegation in JavaScript.",
        ],
    ),
    (
        "react",
        &[
            "What are React hooks and why were they introduced?",
            "Explain the component lifecycle in React.",
            "What is the virtual DOM and how does it work?",
            "How would you optimize performance in a React application?",
            "Explain the context API and when you would use it.",
        ],
    ),
    (
        "java",
        &[
            "What's the difference between an interface and an abstract class?",
            "Explain garbage collection in Java.",
            "What are generics and why are they useful?",
            "How does multithreading work in Java?",
            "What are the key principles of OOP in Java?",
        ],
    ),
    (
        "sql",
        &[
            "What's the difference between INNER JOIN and LEFT JOIN?",
            "Explain normalization and when you would use it.",
            "How would you optimize a slow SQL query?",
            "What are indexes and how do they work?",
            "Explain the difference between DELETE and TRUNCATE.",
        ],
    ),
    (
        "mongodb",
        &[
            "How does MongoDB store data compared to SQL databases?",
            "Explain sharding in MongoDB.",
            "What are the ACID properties in MongoDB?",
            "How would you design schema for a social media application?",
            "Explain indexing strategies in MongoDB.",
        ],
    ),
    (
        "docker",
        &[
            "What's the difference between Docker and virtual machines?",
            "Explain Docker layers and how they work.",
            "How would you persist data in Docker?",
            "Explain Docker networking concepts.",
            "What is Docker Compose and when would you use it?",
        ],
    ),
    (
        "aws",
        &[
            "Explain the differences between EC2, ECS, and Lambda.",
            "How would you design a highly available architecture in AWS?",
            "What are the key security best practices in AWS?",
            "Explain the concept of IAM and role-based access.",
            "How does S3 storage work and what are its use cases?",
        ],
    ),
    (
        "django",
        &[
            "Explain the MTV architecture in Django.",
            "How does the ORM work in Django?",
            "What are middleware in Django and how are they used?",
            "Explain Django's authentication system.",
            "How would you optimize a Django application for performance?",
        ],
    ),
    (
        "nodejs",
        &[
            "How does the event loop work in Node.js?",
            "What's the difference between process.nextTick() and setImmediate()?",
            "How would you handle async operations in Node.js?",
            "Explain the module system in Node.js.",
            "What are streams in Node.js and how would you use them?",
        ],
    ),
    (
        "css",
        &[
            "Explain the box model in CSS.",
            "What's the difference between flexbox and grid?",
            "How does CSS specificity work?",
            "Explain CSS positioning (relative, absolute, fixed, sticky).",
            "What are CSS preprocessors and what benefits do they provide?",
        ],
    ),
    (
        "html",
        &[
            "What's new in HTML5?",
            "Explain semantic HTML and why it's important.",
            "How do you optimize HTML for accessibility?",
            "What are data attributes and how are they used?",
            "Explain the critical rendering path in browsers.",
        ],
    ),
    (
        "devops",
        &[
            "What is CI/CD and how does it benefit development?",
            "Explain infrastructure as code and its benefits.",
            "How would you implement blue/green deployment?",
            "What monitoring tools have you used and why?",
            "How do you approach logging in a microservices architecture?",
        ],
    ),
    (
        "git",
        &[
            "Explain the difference between merge and rebase.",
            "How would you fix a bad commit that's already pushed?",
            "What's your branching strategy preference and why?",
            "Explain git hooks and how they can be used.",
            "How do you handle merge conflicts?",
        ],
    ),
];

/// Generic questions for technologies without a dedicated entry.
const DEFAULT_QUESTIONS: &[&str] = &[
    "Can you describe your experience with this technology?",
    "What projects have you worked on using this technology?",
    "What are some challenges you've faced with this technology and how did you overcome them?",
    "How do you stay updated with the latest developments in this field?",
    "Can you explain a complex concept in this technology in simple terms?",
];

/// Static mapping from technology key to its question list, with a generic
/// fallback list for unrecognized technologies.
pub struct QuestionBank {
    entries: HashMap<String, Vec<String>>,
    default_questions: Vec<String>,
}

impl QuestionBank {
    /// Build the bank from the built-in data. Loaded once at startup.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(tech, questions)| {
                (
                    tech.to_string(),
                    questions.iter().map(|q| q.to_string()).collect(),
                )
            })
            .collect();
        Self {
            entries,
            default_questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Questions for a technology, falling back to the generic list when the
    /// key is unrecognized. Lookup is case-insensitive.
    pub fn questions_for(&self, tech: &str) -> &[String] {
        self.entries
            .get(&tech.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&self.default_questions)
    }

    /// Whether a technology has a dedicated entry.
    pub fn contains(&self, tech: &str) -> bool {
        self.entries.contains_key(&tech.to_lowercase())
    }

    /// Number of technologies with dedicated entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_has_all_technologies() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 14);
        for tech in ["python", "javascript", "sql", "git", "devops"] {
            assert!(bank.contains(tech), "{tech} should be in the bank");
            assert_eq!(bank.questions_for(tech).len(), 5);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let bank = QuestionBank::builtin();
        assert!(bank.contains("Python"));
        assert!(bank.contains("SQL"));
        assert_eq!(bank.questions_for("Docker"), bank.questions_for("docker"));
    }

    #[test]
    fn unknown_tech_falls_back_to_defaults() {
        let bank = QuestionBank::builtin();
        assert!(!bank.contains("cobol"));
        let questions = bank.questions_for("cobol");
        assert_eq!(questions.len(), 5);
        assert!(questions[0].contains("experience"));
    }
}
