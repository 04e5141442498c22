use crate::tokenizer::Span;
use thiserror::Error;

/// Error types for the galaxy engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalaxyError {
    /// Not a canonical Roman numeral
    #[error("'{0}' is not a valid roman numeral")]
    InvalidNumeral(String),

    /// Alien symbol missing from the lexicon at lookup time
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),

    /// Value outside the encodable range
    #[error("{0} is out of range, roman numerals are encoded for 1 through 3998")]
    OutOfRange(u32),

    /// Credit amount in a declaration is not an integer
    #[error("'{0}' is not a whole number of credits")]
    MalformedCredits(String),

    /// Metal named in a question has no declared price
    #[error("no price is known for metal '{0}'")]
    UnknownMetal(String),

    /// Question matched a template but its operands could not be located
    #[error("malformed question: {0}")]
    MalformedQuestion(String),

    /// Fatal error while learning from a definition or declaration line
    #[error("line {line}: {source}")]
    Statement {
        /// 1-based line number within the batch
        line: usize,
        text: String,
        /// Byte range of the offending tokens within `text`
        span: Span,
        source: Box<GalaxyError>,
    },

    #[error("resource limit exceeded: {limit_name} (limit {limit_value}, actual {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },
}

impl GalaxyError {
    /// Attach line location to an error raised while learning from a statement
    pub fn at_line(self, line: usize, text: impl Into<String>, span: Span) -> Self {
        GalaxyError::Statement {
            line,
            text: text.into(),
            span,
            source: Box::new(self),
        }
    }

    /// The underlying error kind, looking through statement location
    pub fn kind(&self) -> &GalaxyError {
        match self {
            GalaxyError::Statement { source, .. } => source.kind(),
            other => other,
        }
    }
}
