//! Fixed skill vocabulary and the text normalisation shared by the extractors.

/// Known technical skills in lowercase canonical form. Matching order follows
/// this list; it is never mutated after startup.
pub const TECH_SKILLS: &[&str] = &[
    "java",
    "python",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "spring boot",
    "django",
    "flask",
    "express",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "ci/cd",
    "jenkins",
    "terraform",
    "ansible",
    "linux",
    "unix",
    "microservices",
    "rest api",
    "graphql",
    "sql",
    "nosql",
    "html",
    "css",
    "sass",
    "less",
    "webpack",
    "babel",
    "npm",
    "yarn",
    "maven",
    "gradle",
    "agile",
    "scrum",
    "devops",
    "machine learning",
    "ai",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "data science",
    "analytics",
];

/// Collapses whitespace runs to single spaces, trims, and lowercases.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
