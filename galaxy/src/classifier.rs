//! Statement classification
//!
//! Every input line is either a definition (`glob is I`), a declaration
//! (`glob glob Silver is 34 Credits`) or a question. Definitions and
//! declarations are applied to the [`Lexicon`] as they are classified and
//! do not reach the question stream.

use crate::error::GalaxyError;
use crate::tokenizer::{position, span_of, texts, tokenize, Span, Token};
use crate::{numeral, EngineConfig, GalaxyResult, Lexicon};
use serde::Serialize;
use tracing::debug;

/// A line together with its 1-based position in the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// What a single line turned out to be
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Definition {
        symbol: String,
        digit: char,
    },
    Declaration {
        metal: String,
        credits: i64,
        quantity: u32,
        unit_value: f64,
    },
    Question,
}

/// A batch split into its three kinds of line, each in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified<'a> {
    pub definitions: Vec<Line<'a>>,
    pub declarations: Vec<Line<'a>>,
    pub questions: Vec<Line<'a>>,
}

pub struct Classifier<'c> {
    config: &'c EngineConfig,
}

impl<'c> Classifier<'c> {
    pub fn new(config: &'c EngineConfig) -> Self {
        Self { config }
    }

    /// Classify every line in one pass, applying definitions and
    /// declarations to `lexicon`. The first failing statement aborts the
    /// batch; the lexicon keeps whatever earlier lines taught it.
    pub fn partition<'a, S>(&self, lines: &'a [S], lexicon: &mut Lexicon) -> GalaxyResult<Classified<'a>>
    where
        S: AsRef<str>,
    {
        let mut classified = Classified::default();

        for (index, text) in lines.iter().enumerate() {
            let line = Line {
                number: index + 1,
                text: text.as_ref(),
            };
            match self.classify(line, lexicon)? {
                Statement::Definition { .. } => classified.definitions.push(line),
                Statement::Declaration { .. } => classified.declarations.push(line),
                Statement::Question => classified.questions.push(line),
            }
        }

        Ok(classified)
    }

    /// Classify one line, applying it to `lexicon` if it is a definition or
    /// declaration.
    pub fn classify(&self, line: Line<'_>, lexicon: &mut Lexicon) -> GalaxyResult<Statement> {
        let tokens = tokenize(line.text);

        if let Some((symbol, digit)) = definition(&tokens) {
            let previous = lexicon.define_symbol(symbol, digit);
            debug!(line = line.number, symbol, %digit, ?previous, "learned symbol");
            return Ok(Statement::Definition {
                symbol: symbol.to_string(),
                digit,
            });
        }

        if let Some(is_idx) = self.declaration_keyword(&tokens) {
            return self
                .declare(&tokens, is_idx, lexicon)
                .map_err(|(err, span)| err.at_line(line.number, line.text, span));
        }

        Ok(Statement::Question)
    }

    /// Position of "is" when the line has the shape of a metal declaration
    fn declaration_keyword(&self, tokens: &[Token<'_>]) -> Option<usize> {
        let is_idx = position(tokens, "is")?;
        let ends_with_credits = tokens.last().is_some_and(|t| t.is("Credits"));
        let metal_before = is_idx
            .checked_sub(1)
            .is_some_and(|m| self.config.is_metal(tokens[m].text));
        (ends_with_credits && metal_before).then_some(is_idx)
    }

    fn declare(
        &self,
        tokens: &[Token<'_>],
        is_idx: usize,
        lexicon: &mut Lexicon,
    ) -> Result<Statement, (GalaxyError, Span)> {
        let metal_token = tokens[is_idx - 1];
        let metal = self
            .config
            .metal(metal_token.text)
            .unwrap_or(metal_token.text)
            .to_string();

        let credits_token = tokens[is_idx + 1];
        let credits: i64 = credits_token.text.parse().map_err(|_| {
            (
                GalaxyError::MalformedCredits(credits_token.text.to_string()),
                credits_token.span,
            )
        })?;

        let numeral_tokens = &tokens[..is_idx - 1];
        let numeral_span = span_of(numeral_tokens, metal_token.span);
        let limit = self.config.limits.max_numeral_symbols;
        if numeral_tokens.len() > limit {
            return Err((
                GalaxyError::ResourceLimitExceeded {
                    limit_name: "max_numeral_symbols".to_string(),
                    limit_value: limit.to_string(),
                    actual_value: numeral_tokens.len().to_string(),
                    suggestion: "A canonical numeral never needs more symbols than this".to_string(),
                },
                numeral_span,
            ));
        }

        let quantity = lexicon.value_of(texts(numeral_tokens)).map_err(|err| {
            let span = match &err {
                GalaxyError::UnknownSymbol(symbol) => numeral_tokens
                    .iter()
                    .find(|t| t.text == symbol)
                    .map_or(numeral_span, |t| t.span),
                _ => numeral_span,
            };
            (err, span)
        })?;

        let unit_value = credits as f64 / f64::from(quantity);
        lexicon.set_unit_value(metal.clone(), unit_value);
        debug!(%metal, credits, quantity, unit_value, "learned metal price");

        Ok(Statement::Declaration {
            metal,
            credits,
            quantity,
            unit_value,
        })
    }
}

/// `<symbol> is <digit>`: the token before the first "is" names a symbol and
/// the token after it is a single roman digit
fn definition<'a>(tokens: &[Token<'a>]) -> Option<(&'a str, char)> {
    let is_idx = position(tokens, "is")?;
    let symbol = tokens.get(is_idx.checked_sub(1)?)?;
    let digit = numeral::parse_digit(tokens.get(is_idx + 1)?.text)?;
    Some((symbol.text, digit))
}
