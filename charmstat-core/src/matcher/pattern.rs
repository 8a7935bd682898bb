use crate::matcher::error::PatternError;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Field name -> captured text for one matched line.
pub type Fields = BTreeMap<String, String>;

/// A compiled line template such as `{unit}: {hour}:{minutes}:{seconds} {message}`.
///
/// Literal text must appear verbatim and in order. Each `{name}` placeholder
/// captures the shortest non-empty text that still lets the rest of the
/// template match, and the template has to cover the entire line. `{{` and
/// `}}` stand for literal braces.
#[derive(Clone)]
pub struct LinePattern {
    template: String,
    regex: Regex,
    names: Vec<String>,
}

enum Segment {
    Literal(String),
    Field(String),
}

impl LinePattern {
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let segments = tokenize(template)?;

        let mut names: Vec<String> = Vec::new();
        let mut expr = String::from("(?s)^");

        for segment in segments {
            match segment {
                Segment::Literal(text) => expr.push_str(&regex::escape(&text)),
                Segment::Field(name) => {
                    if names.contains(&name) {
                        return Err(PatternError::DuplicateField { name });
                    }
                    expr.push_str(&format!("(?P<{name}>.+?)"));
                    names.push(name);
                }
            }
        }
        expr.push('$');

        Ok(Self {
            template: template.to_string(),
            regex: Regex::new(&expr)?,
            names,
        })
    }

    /// Returns `None` when the line does not fit the template.
    pub fn match_line(&self, line: &str) -> Option<Fields> {
        let caps = self.regex.captures(line)?;

        Some(
            self.names
                .iter()
                .filter_map(|name| {
                    caps.name(name)
                        .map(|m| (name.clone(), m.as_str().to_string()))
                })
                .collect(),
        )
    }

    /// Placeholder names in template order.
    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl fmt::Debug for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinePattern")
            .field("template", &self.template)
            .field("fields", &self.names)
            .finish()
    }
}

/// One-shot form of [`LinePattern::compile`] followed by [`LinePattern::match_line`].
pub fn unformat(line: &str, template: &str) -> Result<Option<Fields>, PatternError> {
    Ok(LinePattern::compile(template)?.match_line(line))
}

fn tokenize(template: &str) -> Result<Vec<Segment>, PatternError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                literal.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(PatternError::UnmatchedClosingBrace { position }),
            '{' => {
                let mut name = String::new();
                let mut closed = false;

                for (_, c) in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(PatternError::UnclosedPlaceholder { position }),
                        c => name.push(c),
                    }
                }

                if !closed {
                    return Err(PatternError::UnclosedPlaceholder { position });
                }
                if name.is_empty() {
                    return Err(PatternError::EmptyPlaceholder { position });
                }
                if !is_valid_field_name(&name) {
                    return Err(PatternError::InvalidFieldName { name });
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(name));
            }
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
