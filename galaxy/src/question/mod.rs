//! Question templates
//!
//! A question is recognised by its leading keywords and its operands are
//! sliced out between further keywords:
//!
//! | Leading tokens | Shape                                                   |
//! |----------------|---------------------------------------------------------|
//! | `how much`     | `how much is <numeral> ?`                               |
//! | `how many`     | `how many Credits is <numeral> <metal> ?`               |
//! | `does`         | `does <numeral> <metal> has more Credits than <numeral> <metal> ?` |
//! | `is`           | `is <numeral> larger than <numeral> ?` (or `smaller`)   |
//!
//! Keywords match ignoring case. A missing trailing `?` is tolerated.

mod answer;

pub use answer::render_credits;

use crate::error::GalaxyError;
use crate::tokenizer::{position, Token};
use crate::GalaxyResult;
use serde::Serialize;

/// Which template a question follows, decided by its leading tokens only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    HowMuch,
    HowMany,
    Does,
    Is,
    Unrecognized,
}

const TEMPLATES: &[(&[&str], Template)] = &[
    (&["how", "much"], Template::HowMuch),
    (&["how", "many"], Template::HowMany),
    (&["does"], Template::Does),
    (&["is"], Template::Is),
];

impl Template {
    pub fn detect(tokens: &[Token<'_>]) -> Template {
        TEMPLATES
            .iter()
            .find(|(prefix, _)| {
                prefix.len() <= tokens.len()
                    && prefix.iter().zip(tokens).all(|(keyword, token)| token.is(keyword))
            })
            .map_or(Template::Unrecognized, |(_, template)| *template)
    }
}

/// An alien numeral followed by the metal it counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity<'a> {
    pub numeral: &'a [Token<'a>],
    pub metal: Token<'a>,
}

impl<'a> Quantity<'a> {
    /// Split a non-empty run of tokens into numeral and trailing metal
    fn split(tokens: &'a [Token<'a>], side: &str) -> GalaxyResult<Self> {
        let (metal, numeral) = tokens
            .split_last()
            .ok_or_else(|| GalaxyError::MalformedQuestion(format!("nothing to compare on the {side}")))?;
        Ok(Quantity {
            numeral,
            metal: *metal,
        })
    }
}

/// A question with its operands located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question<'a> {
    HowMuch {
        numeral: &'a [Token<'a>],
    },
    HowMany {
        numeral: &'a [Token<'a>],
        metal: Token<'a>,
    },
    /// Compares credit worth of two metal quantities
    Does {
        left: Quantity<'a>,
        right: Quantity<'a>,
    },
    /// Compares two bare numerals
    Is {
        left: &'a [Token<'a>],
        right: &'a [Token<'a>],
    },
    /// An "is" question that asks for neither "larger" nor "smaller"
    NotAComparison,
    Unrecognized,
}

impl<'a> Question<'a> {
    pub fn parse(tokens: &'a [Token<'a>]) -> GalaxyResult<Self> {
        match Template::detect(tokens) {
            Template::HowMuch => Ok(Question::HowMuch {
                numeral: to_question_mark(after(tokens, "is")?),
            }),
            Template::HowMany => {
                let operands = to_question_mark(after(tokens, "is")?);
                let (metal, numeral) = operands.split_last().ok_or_else(|| {
                    GalaxyError::MalformedQuestion("no metal to count".to_string())
                })?;
                Ok(Question::HowMany {
                    numeral,
                    metal: *metal,
                })
            }
            Template::Does => {
                let rest = after(tokens, "does")?;
                let verb = position(rest, "has")
                    .or_else(|| position(rest, "have"))
                    .ok_or_else(|| missing("has"))?;
                let left = Quantity::split(&rest[..verb], "left")?;
                let right = Quantity::split(to_question_mark(after(&rest[verb..], "than")?), "right")?;
                Ok(Question::Does { left, right })
            }
            Template::Is => {
                let rest = after(tokens, "is")?;
                let Some(relation) = position(rest, "larger").or_else(|| position(rest, "smaller"))
                else {
                    return Ok(Question::NotAComparison);
                };
                let left = &rest[..relation];
                let right = to_question_mark(after(&rest[relation..], "than")?);
                Ok(Question::Is { left, right })
            }
            Template::Unrecognized => Ok(Question::Unrecognized),
        }
    }
}

fn missing(keyword: &str) -> GalaxyError {
    GalaxyError::MalformedQuestion(format!("expected '{keyword}'"))
}

/// Tokens following the first `keyword`
fn after<'a>(tokens: &'a [Token<'a>], keyword: &str) -> GalaxyResult<&'a [Token<'a>]> {
    let idx = position(tokens, keyword).ok_or_else(|| missing(keyword))?;
    Ok(&tokens[idx + 1..])
}

/// Tokens up to (not including) the first question mark
fn to_question_mark<'a>(tokens: &'a [Token<'a>]) -> &'a [Token<'a>] {
    let end = position(tokens, "?").unwrap_or(tokens.len());
    &tokens[..end]
}
