//! MathJax-to-plain-text conversion.
//!
//! One ordered rule table, applied sequentially: every rule operates on the
//! previous rule's output. Order is load-bearing in two places. Symbol
//! tokens that share a prefix must run longest-first (`\infty` and `\int`
//! before `\in`, `\subseteq` before `\subset`), and the generic
//! superscript/subscript rules run after every symbol rule so they cannot
//! clobber a named token. Whitespace collapse is always last.
//!
//! The table covers the restricted dialect found in the question files;
//! anything it does not recognize passes through verbatim, which also makes
//! the whole conversion idempotent on its own output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Document, Question};

enum Rule {
    /// Plain substring substitution.
    Literal(&'static str, &'static str),
    /// Regex rewrite with a $n capture template.
    Pattern(Regex, &'static str),
}

// Named symbols in application order. \infty and \int must precede \in,
// \subseteq must precede \subset, and the double-ended arrows must precede
// the single-direction ones.
const SYMBOLS: &[(&str, &str)] = &[
    ("\\theta", "θ"),
    ("\\propto", "∝"),
    ("\\times", "×"),
    ("\\div", "÷"),
    ("\\sim", "~"),
    ("\\angle", "∠"),
    ("\\parallel", "∥"),
    ("\\perp", "⊥"),
    ("\\leq", "≤"),
    ("\\geq", "≥"),
    ("\\neq", "≠"),
    ("\\infty", "∞"),
    ("\\int", "∫"),
    ("\\sum", "Σ"),
    ("\\partial", "∂"),
    ("\\alpha", "α"),
    ("\\beta", "β"),
    ("\\gamma", "γ"),
    ("\\Delta", "Δ"),
    ("\\delta", "δ"),
    ("\\pi", "π"),
    ("\\subseteq", "⊆"),
    ("\\subset", "⊂"),
    ("\\in", "∈"),
    ("\\cup", "∪"),
    ("\\cap", "∩"),
    ("\\emptyset", "∅"),
    ("\\Leftrightarrow", "⇔"),
    ("\\leftrightarrow", "↔"),
    ("\\Rightarrow", "⇒"),
    ("\\rightarrow", "→"),
    ("\\degree", "°"),
];

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let pat = |p: &str, rep: &'static str| {
        Rule::Pattern(Regex::new(p).expect("static rule pattern"), rep)
    };
    let mut rules = Vec::new();

    // math delimiters: drop the fences, keep the content
    for tok in ["\\(", "\\)", "\\[", "\\]"] {
        rules.push(Rule::Literal(tok, ""));
    }

    // wrappers that reduce to their content or a plain-text form
    rules.push(pat(r"\\text\{([^}]*)\}", "$1"));
    rules.push(pat(r"\\frac\{([^}]*)\}\{([^}]*)\}", "($1/$2)"));
    rules.push(pat(r"\\frac\s+(\S+)\s+(\S+)", "($1/$2)"));
    rules.push(pat(r"\\sqrt\{([^}]*)\}", "sqrt($1)"));
    rules.push(pat(r"\\sqrt\s+(\S+)", "sqrt($1)"));
    // braced base is parenthesized here, not by the later subscript rule,
    // which would only capture the first character of a multi-digit base
    rules.push(pat(r"\\log_\{([^}]+)\}", "log_($1)"));
    rules.push(pat(r"\\log_([a-zA-Z0-9]+)", "log_$1"));
    rules.push(pat(r"\\log\{([^}]*)\}", "log($1)"));

    // trig names keep their argument, lose the backslash
    for (from, to) in [("\\sin ", "sin "), ("\\cos ", "cos "), ("\\tan ", "tan ")] {
        rules.push(Rule::Literal(from, to));
    }

    for &(from, to) in SYMBOLS {
        rules.push(Rule::Literal(from, to));
    }

    rules.push(pat(r"\\overline\{([^}]*)\}", "$1"));
    rules.push(pat(r"\\underbrace\{([^}]*)\}", "$1"));

    // scripts, strictly after every symbol rule
    rules.push(pat(r"\^\{([^}]*)\}", "^($1)"));
    rules.push(pat(r"\^([0-9a-zA-Z])", "^($1)"));
    rules.push(pat(r"_\{([^}]*)\}", "_($1)"));
    rules.push(pat(r"_([0-9a-zA-Z])", "_($1)"));

    // whitespace collapse, always last
    rules.push(pat(r"\s+", " "));
    rules
});

/// Apply the full rule table to one string.
pub fn normalize_math(text: &str) -> String {
    let mut out = text.to_string();
    for rule in RULES.iter() {
        match rule {
            Rule::Literal(from, to) => {
                if out.contains(from) {
                    out = out.replace(from, to);
                }
            }
            Rule::Pattern(re, rep) => {
                out = re.replace_all(&out, *rep).into_owned();
            }
        }
    }
    out
}

/// Rewrite the three text fields the dialect appears in: the question text,
/// each option's display text, the explanation. Absent fields pass through
/// unchanged. Returns how many fields actually changed.
pub fn normalize_question(q: &mut Question) -> usize {
    let mut changed = 0;

    if let Some(text) = q.question.as_deref() {
        let cleaned = normalize_math(text);
        if cleaned != text {
            q.question = Some(cleaned);
            changed += 1;
        }
    }
    for choice in &mut q.options {
        if let Some(text) = choice.text() {
            let cleaned = normalize_math(text);
            if cleaned != text {
                choice.set_text(cleaned);
                changed += 1;
            }
        }
    }
    if let Some(text) = q.explanation.as_deref() {
        let cleaned = normalize_math(text);
        if cleaned != text {
            q.explanation = Some(cleaned);
            changed += 1;
        }
    }
    changed
}

/// Normalize every question in the document; returns the changed-field count.
pub fn normalize_document(doc: &mut Document) -> usize {
    doc.questions.iter_mut().map(normalize_question).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, ChoiceDetail};
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_delimiters_are_stripped() {
        assert_eq!(normalize_math(r"\(x^2\)"), "x^(2)");
    }

    #[test]
    fn display_delimiters_are_stripped() {
        assert_eq!(normalize_math(r"\[x + y\]"), "x + y");
    }

    #[test]
    fn fractions_become_parenthesized_quotients() {
        assert_eq!(normalize_math(r"\frac{1}{2}"), "(1/2)");
        assert_eq!(normalize_math(r"\frac{a+b}{c}"), "(a+b/c)");
    }

    #[test]
    fn roots_become_sqrt_calls() {
        assert_eq!(normalize_math(r"\sqrt{16}"), "sqrt(16)");
    }

    #[test]
    fn log_base_keeps_its_base() {
        assert_eq!(normalize_math(r"\log_2 8"), "log_(2) 8");
        assert_eq!(normalize_math(r"\log_{10} x"), "log_(10) x");
    }

    #[test]
    fn named_symbols_become_glyphs() {
        assert_eq!(normalize_math(r"\theta"), "θ");
        assert_eq!(normalize_math(r"a \leq b"), "a ≤ b");
        assert_eq!(normalize_math(r"2 \times 3"), "2 × 3");
        assert_eq!(normalize_math(r"p \Rightarrow q"), "p ⇒ q");
        assert_eq!(normalize_math(r"90\degree"), "90°");
    }

    #[test]
    fn longer_tokens_are_not_eaten_by_their_prefixes() {
        assert_eq!(normalize_math(r"\infty \int \in"), "∞ ∫ ∈");
        assert_eq!(normalize_math(r"A \subseteq B \subset C"), "A ⊆ B ⊂ C");
        assert_eq!(
            normalize_math(r"\Leftrightarrow \leftrightarrow \rightarrow"),
            "⇔ ↔ →"
        );
    }

    #[test]
    fn scripts_get_parenthesized() {
        assert_eq!(normalize_math(r"x^{10}"), "x^(10)");
        assert_eq!(normalize_math("x^3"), "x^(3)");
        assert_eq!(normalize_math("a_{n}"), "a_(n)");
        assert_eq!(normalize_math("a_n"), "a_(n)");
    }

    #[test]
    fn text_wrapper_reduces_to_content() {
        assert_eq!(normalize_math(r"10 \text{ cm}"), "10 cm");
    }

    #[test]
    fn trig_names_lose_the_backslash() {
        assert_eq!(normalize_math(r"\sin \theta + \cos \theta"), "sin θ + cos θ");
    }

    #[test]
    fn whitespace_collapses_to_single_spaces() {
        assert_eq!(normalize_math("a   b\n\nc"), "a b c");
    }

    #[test]
    fn idempotent_on_already_normalized_text() {
        for s in ["x^(2)", "(1/2)", "θ", "sqrt(3)", "log_(2) 8", "plain words"] {
            assert_eq!(normalize_math(s), s);
        }
    }

    #[test]
    fn rewrites_question_options_and_explanation() {
        let mut q = Question {
            question: Some(r"Solve \(x^2 = 4\)".to_string()),
            options: vec![
                Choice::Text(r"A. \frac{1}{2}".to_string()),
                Choice::Detailed(ChoiceDetail {
                    text: Some(r"B. \theta".to_string()),
                    ..Default::default()
                }),
            ],
            explanation: Some(r"Because \pi > 3".to_string()),
            ..Default::default()
        };
        let changed = normalize_question(&mut q);
        assert_eq!(changed, 4);
        assert_eq!(q.question.as_deref(), Some("Solve x^(2) = 4"));
        assert_eq!(q.options[0].text(), Some("A. (1/2)"));
        assert_eq!(q.options[1].text(), Some("B. θ"));
        assert_eq!(q.explanation.as_deref(), Some("Because π > 3"));
    }

    #[test]
    fn absent_fields_pass_through() {
        let mut q = Question {
            options: vec![Choice::Detailed(ChoiceDetail::default())],
            ..Default::default()
        };
        assert_eq!(normalize_question(&mut q), 0);
        assert_eq!(q.question, None);
        assert_eq!(q.options[0].text(), None);
    }
}
