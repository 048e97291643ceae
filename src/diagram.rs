//! Named corrections for SVG diagram snippets embedded in explanations.
//!
//! This is not a geometry engine. Each fix is a closed, ordered list of
//! exact (match, replacement) string pairs recorded against a known-bad
//! prior state of one diagram. If none of a fix's match strings occur, the
//! prior state is gone (usually because the fix already ran) and the fix
//! reports [`PipelineError::FixNotApplicable`] instead of touching the text.

use crate::error::PipelineError;

/// One named, versioned fix.
pub struct DiagramFix {
    pub id: &'static str,
    /// Lowercase substrings that mark an explanation as a candidate.
    pub keywords: &'static [&'static str],
    /// Ordered exact-match replacements.
    pub pairs: &'static [(&'static str, &'static str)],
}

// Moves the circle chord from a mid-circle horizontal line at y=200 up to a
// true chord at y=80, and drags the perpendicular, the radius and every
// label along with it.
const CHORD_GEOMETRY: DiagramFix = DiagramFix {
    id: "chord-geometry",
    keywords: &["chord"],
    pairs: &[
        (
            r#"<line x1="100" y1="200" x2="200" y2="200" stroke="red" stroke-width="3"/>"#,
            r#"<line x1="80" y1="80" x2="220" y2="80" stroke="red" stroke-width="3"/>"#,
        ),
        (
            r#"<line x1="150" y1="150" x2="150" y2="200" stroke="blue" stroke-width="2" stroke-dasharray="5,5"/>"#,
            r#"<line x1="150" y1="150" x2="150" y2="80" stroke="blue" stroke-width="2" stroke-dasharray="5,5"/>"#,
        ),
        (
            r#"<line x1="150" y1="150" x2="200" y2="200" stroke="green" stroke-width="2"/>"#,
            r#"<line x1="150" y1="150" x2="220" y2="80" stroke="green" stroke-width="2"/>"#,
        ),
        (
            r#"<text x="175" y="205" font-size="12" fill="red">12 cm</text>"#,
            r#"<text x="140" y="70" font-size="12" fill="red">12 cm</text>"#,
        ),
        (
            r#"<text x="155" y="180" font-size="12" fill="blue">8 cm</text>"#,
            r#"<text x="155" y="120" font-size="12" fill="blue">8 cm</text>"#,
        ),
        (
            r#"<text x="95" y="205" font-size="12" fill="black">B</text>"#,
            r#"<text x="70" y="75" font-size="12" fill="black">B</text>"#,
        ),
        (
            r#"<text x="195" y="205" font-size="12" fill="black">A</text>"#,
            r#"<text x="215" y="75" font-size="12" fill="black">A</text>"#,
        ),
        (
            r#"<text x="155" y="205" font-size="12" fill="black">M</text>"#,
            r#"<text x="155" y="85" font-size="12" fill="black">M</text>"#,
        ),
        (
            r#"<text x="180" y="180" font-size="12" fill="green">r = ?</text>"#,
            r#"<text x="190" y="120" font-size="12" fill="green">r = ?</text>"#,
        ),
    ],
};

// Rebuilds the 3-4-5 right triangle so the right angle sits at the bottom
// left corner and the Adjacent/Opposite/Hypotenuse labels land on the
// correct sides.
const TRIG_SIDES: DiagramFix = DiagramFix {
    id: "trig-sides",
    keywords: &["hypotenuse", "opposite", "adjacent", "sin", "cos", "tan"],
    pairs: &[
        (
            r#"<polygon points="100,150 200,150 150,80" fill="none" stroke="black" stroke-width="2"/>"#,
            r#"<polygon points="100,150 200,150 100,80" fill="none" stroke="black" stroke-width="2"/>"#,
        ),
        (
            r#"<line x1="145" y1="150" x2="145" y2="145" stroke="black" stroke-width="2"/>"#,
            r#"<line x1="100" y1="150" x2="105" y2="150" stroke="black" stroke-width="2"/>"#,
        ),
        (
            r#"<line x1="145" y1="145" x2="150" y2="145" stroke="black" stroke-width="2"/>"#,
            r#"<line x1="105" y1="150" x2="105" y2="145" stroke="black" stroke-width="2"/>"#,
        ),
        (
            r#"<text x="90" y="155" font-size="14">3</text>"#,
            r#"<text x="90" y="115" font-size="14">3</text>"#,
        ),
        (
            r#"<text x="175" y="155" font-size="14">4</text>"#,
            r#"<text x="140" y="160" font-size="14">4</text>"#,
        ),
        (
            r#"<text x="140" y="100" font-size="14">5</text>"#,
            r#"<text x="150" y="120" font-size="14">5</text>"#,
        ),
        (
            r#"<text x="145" y="165" font-size="14">Adjacent</text>"#,
            r#"<text x="140" y="165" font-size="14">Adjacent</text>"#,
        ),
        (
            r#"<text x="175" y="125" font-size="14">Hypotenuse</text>"#,
            r#"<text x="150" y="100" font-size="14">Hypotenuse</text>"#,
        ),
        (
            r#"<text x="115" y="125" font-size="14">Opposite</text>"#,
            r#"<text x="85" y="115" font-size="14">Opposite</text>"#,
        ),
    ],
};

/// Every registered fix, in registry order.
pub const FIXES: &[DiagramFix] = &[CHORD_GEOMETRY, TRIG_SIDES];

/// Look a fix up by id.
pub fn lookup(fix_id: &str) -> Result<&'static DiagramFix, PipelineError> {
    FIXES
        .iter()
        .find(|f| f.id == fix_id)
        .ok_or_else(|| PipelineError::UnknownFix {
            fix_id: fix_id.to_string(),
        })
}

impl DiagramFix {
    /// True when the explanation mentions any of the fix's trigger words.
    pub fn is_candidate(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }

    /// Replace every pair whose match string occurs. At least one pair must
    /// match, otherwise the fix does not apply and the input is returned
    /// untouched via the error.
    pub fn apply(&self, text: &str) -> Result<String, PipelineError> {
        let mut out = text.to_string();
        let mut hits = 0usize;
        for &(from, to) in self.pairs {
            if out.contains(from) {
                out = out.replace(from, to);
                hits += 1;
            }
        }
        if hits == 0 {
            return Err(PipelineError::FixNotApplicable {
                fix_id: self.id.to_string(),
            });
        }
        Ok(out)
    }
}

/// Apply the fix named `fix_id` to one explanation text.
pub fn apply_named_fix(text: &str, fix_id: &str) -> Result<String, PipelineError> {
    lookup(fix_id)?.apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stale_chord_svg() -> String {
        format!(
            "<svg>{}\n{}</svg>",
            r#"<line x1="100" y1="200" x2="200" y2="200" stroke="red" stroke-width="3"/>"#,
            r#"<text x="175" y="205" font-size="12" fill="red">12 cm</text>"#,
        )
    }

    #[test]
    fn chord_fix_rewrites_known_fragments() {
        let patched = apply_named_fix(&stale_chord_svg(), "chord-geometry").expect("applies");
        assert!(patched.contains(r#"<line x1="80" y1="80" x2="220" y2="80""#));
        assert!(patched.contains(r#"<text x="140" y="70""#));
        assert!(!patched.contains(r#"y1="200""#));
    }

    #[test]
    fn absent_match_is_fix_not_applicable_not_a_parse_error() {
        let err = apply_named_fix("no svg here at all", "chord-geometry").expect_err("no match");
        assert!(matches!(err, PipelineError::FixNotApplicable { .. }));
    }

    #[test]
    fn second_application_reports_not_applicable() {
        let patched = apply_named_fix(&stale_chord_svg(), "chord-geometry").expect("applies");
        let err = apply_named_fix(&patched, "chord-geometry").expect_err("already patched");
        assert!(matches!(err, PipelineError::FixNotApplicable { .. }));
    }

    #[test]
    fn unknown_fix_id_is_its_own_error() {
        let err = apply_named_fix("anything", "no-such-fix").expect_err("unknown id");
        assert!(matches!(err, PipelineError::UnknownFix { .. }));
    }

    #[test]
    fn keyword_gate_selects_candidates() {
        let (chord, trig) = (lookup("chord-geometry").unwrap(), lookup("trig-sides").unwrap());
        assert!(chord.is_candidate("The Chord AB bisects..."));
        assert!(!chord.is_candidate("Pure algebra, no circles"));
        assert!(trig.is_candidate("the hypotenuse is 5"));
        assert!(!trig.is_candidate("set theory"));
    }

    #[test]
    fn trig_fix_moves_the_right_angle_marker() {
        let text = format!(
            "sin θ diagram: {}",
            r#"<polygon points="100,150 200,150 150,80" fill="none" stroke="black" stroke-width="2"/>"#
        );
        let patched = apply_named_fix(&text, "trig-sides").expect("applies");
        assert!(patched.contains(r#"points="100,150 200,150 100,80""#));
    }
}
