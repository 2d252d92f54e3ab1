//! Name templates.
//!
//! A template is literal text with `%x` codes:
//!
//! | code | value |
//! |------|-------|
//! | `%l` | label of the level (the series name by default) |
//! | `%m` | original directory name |
//! | `%n` | number, or the bonus label for unnumbered nodes |
//! | `%r` | roman number, or the bonus label |
//! | `%p` | prefix, numbered nodes only |
//! | `%s` | special label, numbered nodes only |
//! | `%u` | number of the parent |
//! | `%R` | roman number of the parent |
//! | `%t` | tag of the parent level |
//! | `%_` | a space |
//! | `%%` | a literal `%` |
//!
//! `%u`, `%R`, `%t` and `%_` print nothing when the parent is the series root or has
//! no number. Trailing whitespace is removed from the result.

use super::{NodeId, Series};
use crate::error::{Result, TankobonError};

const CODES: &str = "lmnrpsuRt_%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Code(char),
}

fn tokenize(template: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = template.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '%' {
            continue;
        }
        if start < i {
            tokens.push(Token::Literal(&template[start..i]));
        }
        match chars.next() {
            Some((j, code)) if CODES.contains(code) => {
                tokens.push(Token::Code(code));
                start = j + code.len_utf8();
            }
            Some((_, code)) => {
                return Err(TankobonError::Format(format!(
                    "unknown template code %{} in '{}'",
                    code, template
                )))
            }
            None => {
                return Err(TankobonError::Format(format!(
                    "template '{}' ends with a lone %",
                    template
                )))
            }
        }
    }
    if start < template.len() {
        tokens.push(Token::Literal(&template[start..]));
    }
    Ok(tokens)
}

/// Check a template without rendering it.
pub fn validate(template: &str) -> Result<()> {
    tokenize(template).map(|_| ())
}

impl Series {
    /// New name of a node, using the template of its level.
    pub fn render(&self, id: NodeId) -> Result<String> {
        let level = self.node(id).level();
        let opts = self.level_options(level).ok_or_else(|| {
            TankobonError::Format(format!("no template for {:?} nodes", level))
        })?;
        self.render_with(id, &opts.template)
    }

    pub fn render_with(&self, id: NodeId, template: &str) -> Result<String> {
        let node = self.node(id);
        let opts = self.level_options(node.level()).ok_or_else(|| {
            TankobonError::Format(format!("no template for {:?} nodes", node.level()))
        })?;
        let parent = node.parent().filter(|p| !self.node(*p).skip());
        let kind = if opts.force_decimal { 'f' } else { 'd' };
        let arabic = format!("0{}{}", self.width(id), kind);

        let mut out = String::new();
        for token in tokenize(template)? {
            let code = match token {
                Token::Literal(text) => {
                    out.push_str(text);
                    continue;
                }
                Token::Code(code) => code,
            };
            let part = match code {
                'l' => opts.label.clone(),
                'm' => Some(node.name().to_string()),
                'n' => match node.number() {
                    Some(n) => Some(n.render(&arabic)?),
                    None => node.extra().map(str::to_string),
                },
                'r' => match node.number() {
                    Some(n) => Some(n.render("r")?),
                    None => node.extra().map(str::to_string),
                },
                'p' => node.number().map(|_| opts.prefix.clone()),
                's' => node
                    .number()
                    .and_then(|_| node.extra())
                    .map(str::to_string),
                'u' => parent.map(|p| self.render_with(p, "%n")).transpose()?,
                'R' => parent.map(|p| self.render_with(p, "%r")).transpose()?,
                't' => parent.and_then(|_| opts.upper.clone()),
                '_' => parent.map(|_| " ".to_string()),
                '%' => Some("%".to_string()),
                other => {
                    return Err(TankobonError::Format(format!(
                        "unknown template code %{}",
                        other
                    )))
                }
            };
            if let Some(part) = part {
                out.push_str(&part);
            }
        }
        Ok(out.trim_end().to_string())
    }
}
