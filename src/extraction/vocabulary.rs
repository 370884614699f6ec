//! Skill vocabularies

/// Built-in technical skills, in reporting order
pub static TECHNICAL_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "django",
    "flask",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
];

/// Built-in soft skills, in reporting order
pub static SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "time management",
    "analytical",
    "creative",
];

/// A closed, duplicate-free pair of term lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    technical: Vec<String>,
    soft: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    pub fn builtin() -> Self {
        Self {
            technical: TECHNICAL_SKILLS.iter().map(|s| s.to_string()).collect(),
            soft: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append user terms after the built-in ones.
    ///
    /// Blank terms and case-insensitive duplicates of terms already in the
    /// same list are skipped, so the lists stay duplicate-free.
    pub fn with_extras(mut self, technical: &[String], soft: &[String]) -> Self {
        for term in technical {
            push_unique(&mut self.technical, term);
        }
        for term in soft {
            push_unique(&mut self.soft, term);
        }
        self
    }

    pub fn technical(&self) -> &[String] {
        &self.technical
    }

    pub fn soft(&self) -> &[String] {
        &self.soft
    }

    /// Total number of terms across both lists
    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, term: &str) {
    let term = term.trim();
    if term.is_empty() {
        return;
    }
    let lowered = term.to_lowercase();
    if list.iter().any(|existing| existing.to_lowercase() == lowered) {
        return;
    }
    list.push(term.to_string());
}
