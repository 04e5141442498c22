use super::{Quantity, Question};
use crate::error::GalaxyError;
use crate::tokenizer::{join, texts, Token};
use crate::{GalaxyResult, Lexicon, ResourceLimits};
use std::cmp::Ordering;

impl Question<'_> {
    /// Resolve the question against what `lexicon` has learned
    pub fn answer(&self, lexicon: &Lexicon, limits: &ResourceLimits) -> GalaxyResult<String> {
        let resolver = Resolver { lexicon, limits };

        match self {
            Question::HowMuch { numeral } => {
                let value = resolver.value(numeral)?;
                Ok(format!("{} is {}", join(numeral), value))
            }
            Question::HowMany { numeral, metal } => {
                let credits = resolver.credits(numeral, metal)?;
                Ok(format!(
                    "{} is {} Credits",
                    join_with_metal(numeral, metal.text),
                    render_credits(credits)
                ))
            }
            Question::Does { left, right } => {
                let left_credits = resolver.credits(left.numeral, &left.metal)?.trunc();
                let right_credits = resolver.credits(right.numeral, &right.metal)?.trunc();
                let relation = match left_credits.partial_cmp(&right_credits) {
                    Some(Ordering::Greater) => "has more Credits than",
                    Some(Ordering::Less) => "has less Credits than",
                    _ => "has equal Credits to",
                };
                Ok(format!(
                    "{} {} {}",
                    describe(left),
                    relation,
                    describe(right)
                ))
            }
            Question::Is { left, right } => {
                let left_value = resolver.value(left)?;
                let right_value = resolver.value(right)?;
                let relation = match left_value.cmp(&right_value) {
                    Ordering::Greater => "is larger than",
                    Ordering::Less => "is smaller than",
                    Ordering::Equal => "is equal to",
                };
                Ok(format!("{} {} {}", join(left), relation, join(right)))
            }
            Question::NotAComparison => Ok(String::new()),
            Question::Unrecognized => Err(GalaxyError::MalformedQuestion(
                "unrecognized question".to_string(),
            )),
        }
    }
}

struct Resolver<'r> {
    lexicon: &'r Lexicon,
    limits: &'r ResourceLimits,
}

impl Resolver<'_> {
    fn value(&self, numeral: &[Token<'_>]) -> GalaxyResult<u32> {
        if numeral.len() > self.limits.max_numeral_symbols {
            return Err(GalaxyError::ResourceLimitExceeded {
                limit_name: "max_numeral_symbols".to_string(),
                limit_value: self.limits.max_numeral_symbols.to_string(),
                actual_value: numeral.len().to_string(),
                suggestion: "A canonical numeral never needs more symbols than this".to_string(),
            });
        }
        self.lexicon.value_of(texts(numeral))
    }

    fn credits(&self, numeral: &[Token<'_>], metal: &Token<'_>) -> GalaxyResult<f64> {
        let value = self.value(numeral)?;
        let unit_value = self
            .lexicon
            .unit_value(metal.text)
            .ok_or_else(|| GalaxyError::UnknownMetal(metal.text.to_string()))?;
        Ok(f64::from(value) * unit_value)
    }
}

/// Whole amounts print without a fractional part, others with one digit
pub fn render_credits(credits: f64) -> String {
    if credits.fract() == 0.0 {
        format!("{:.0}", credits)
    } else {
        format!("{:.1}", credits)
    }
}

fn describe(quantity: &Quantity<'_>) -> String {
    join_with_metal(quantity.numeral, &title_case(quantity.metal.text))
}

fn join_with_metal(numeral: &[Token<'_>], metal: &str) -> String {
    format!("{} {}", join(numeral), metal)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
