//! Label classification by substring rules.

use crate::model::Category;

/// A single substring rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Substring looked for in the label (case-sensitive)
    pub pattern: String,
    /// Category assigned when the pattern is found
    pub category: Category,
}

impl ClassificationRule {
    /// Create a new rule.
    pub fn new(pattern: impl Into<String>, category: Category) -> Self {
        Self {
            pattern: pattern.into(),
            category,
        }
    }

    fn matches(&self, label: &str) -> bool {
        label.contains(self.pattern.as_str())
    }
}

/// Ordered rule list; the first matching rule wins.
///
/// The default order checks `Business Area`, then `Business Domain`, then
/// `Service Domain`. A label matching none is [`Category::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<ClassificationRule>,
}

impl Classifier {
    /// Create a classifier with an explicit rule order.
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// Append a rule with the lowest priority.
    pub fn with_rule(mut self, pattern: impl Into<String>, category: Category) -> Self {
        self.rules.push(ClassificationRule::new(pattern, category));
        self
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Classify a label.
    pub fn classify(&self, label: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(label))
            .map(|rule| rule.category)
            .unwrap_or_default()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(vec![
            ClassificationRule::new("Business Area", Category::BusinessArea),
            ClassificationRule::new("Business Domain", Category::BusinessDomain),
            ClassificationRule::new("Service Domain", Category::ServiceDomain),
        ])
    }
}
