use crate::domain::Tone;

pub const DEFAULT_FORMAT: &str = "%u %t %n";

/// Widths above this are clamped when the format is parsed.
pub const MAX_FIELD_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field { code: char, min_width: usize },
}

/// A field's text and, when decorated, the tone to paint it with. Width
/// padding is measured on `text` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub text: String,
    pub tone: Option<Tone>,
}

impl FieldValue {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: None }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone: Some(tone) }
    }
}

pub trait FieldSource {
    fn value(&self, code: char) -> FieldValue;
}

impl<F: Fn(char) -> FieldValue> FieldSource for F {
    fn value(&self, code: char) -> FieldValue {
        self(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    segments: Vec<Segment>,
}

impl FormatSpec {
    /// Single left-to-right pass. Never fails: a directive cut off by the end
    /// of the string is dropped, `%<digits>%` yields a bare `%`, and widths
    /// are clamped to [`MAX_FIELD_WIDTH`].
    pub fn parse(format: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let mut min_width: usize = 0;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                min_width = min_width.saturating_mul(10).saturating_add(d as usize).min(MAX_FIELD_WIDTH);
                chars.next();
            }

            match chars.next() {
                None => break,
                Some('%') => literal.push('%'),
                Some(code) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field { code, min_width });
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn render(&self, source: &impl FieldSource) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field { code, min_width } => {
                    let value = source.value(*code);
                    let visible = value.text.chars().count();
                    match value.tone {
                        Some(tone) => out.push_str(&tone.paint(&value.text)),
                        None => out.push_str(&value.text),
                    }
                    out.extend(std::iter::repeat(' ').take(min_width.saturating_sub(visible)));
                }
            }
        }
        out
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::parse(DEFAULT_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(code: char) -> FieldValue {
        match code {
            'u' => FieldValue::plain("ABC"),
            'n' => FieldValue::plain("App1"),
            't' => FieldValue::plain(""),
            'e' => FieldValue::toned("2026-01-01 00:00", Tone::Red),
            _ => FieldValue::plain(""),
        }
    }

    fn render(format: &str) -> String {
        FormatSpec::parse(format).render(&fields)
    }

    fn strip_escapes(s: &str) -> String {
        let re = regex::Regex::new("\x1b\\[[0-9;]*m").unwrap();
        re.replace_all(s, "").into_owned()
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(render("no directives here"), "no directives here");
        assert_eq!(render(""), "");
    }

    #[test]
    fn percent_escape() {
        assert_eq!(render("%%"), "%");
        assert_eq!(render("100%% done"), "100% done");
    }

    #[test]
    fn width_never_applies_to_percent_escape() {
        assert_eq!(render("%5%"), "%");
        assert_eq!(FormatSpec::parse("%5%").segments(), &[Segment::Literal("%".into())]);
    }

    #[test]
    fn default_format_with_empty_team() {
        assert_eq!(render(DEFAULT_FORMAT), "ABC  App1");
    }

    #[test]
    fn width_pads_right_without_truncating() {
        assert_eq!(render("%10u|"), "ABC       |");
        assert_eq!(render("%2u|"), "ABC|");
        assert_eq!(render("%3u|"), "ABC|");
    }

    #[test]
    fn unknown_code_renders_empty_but_padded() {
        assert_eq!(render("[%4z]"), "[    ]");
        assert_eq!(render("[%z]"), "[]");
    }

    #[test]
    fn truncated_directive_keeps_prior_literal() {
        assert_eq!(render("abc%"), "abc");
        assert_eq!(render("abc%12"), "abc");
        assert_eq!(render("%u x %"), "ABC x ");
    }

    #[test]
    fn padding_counts_visible_characters_only() {
        colored::control::set_override(true);
        let out = render("%20e|");
        assert!(out.starts_with("\x1b[31m2026-01-01 00:00"), "{out:?}");
        assert!(out.ends_with("\x1b[0m    |"), "{out:?}");
        assert_eq!(strip_escapes(&out), "2026-01-01 00:00    |");
    }

    #[test]
    fn oversized_width_is_clamped() {
        let spec = FormatSpec::parse("%18446744073709551615u|");
        assert_eq!(spec.segments()[0], Segment::Field { code: 'u', min_width: MAX_FIELD_WIDTH });
        let out = spec.render(&fields);
        assert_eq!(out.chars().count(), MAX_FIELD_WIDTH + 1);
        assert!(out.starts_with("ABC ") && out.ends_with(" |"));

        let out = render("%9999999999n");
        assert_eq!(out.chars().count(), MAX_FIELD_WIDTH);
    }

    #[test]
    fn padding_counts_chars_not_bytes() {
        let spec = FormatSpec::parse("%6n|");
        let out = spec.render(&|_: char| FieldValue::plain("Ünï"));
        assert_eq!(out, "Ünï   |");
    }

    #[test]
    fn parses_segments() {
        let spec = FormatSpec::parse("id=%40u %n");
        assert_eq!(
            spec.segments(),
            &[
                Segment::Literal("id=".into()),
                Segment::Field { code: 'u', min_width: 40 },
                Segment::Literal(" ".into()),
                Segment::Field { code: 'n', min_width: 0 },
            ]
        );
    }
}
