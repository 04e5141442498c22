use crate::question::Template;
use crate::Lexicon;
use serde::Serialize;

/// The answer to one question line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// 1-based line number of the question within its batch
    pub line: usize,
    pub question: String,
    pub template: Template,
    pub answer: String,
    /// False when the fallback answer was given
    pub resolved: bool,
    /// Why the question could not be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response from running a batch of lines
///
/// Answers appear in the order of their question lines. The lexicon is the
/// state learned from the batch's definitions and declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub answers: Vec<Answer>,
    pub lexicon: Lexicon,
}

impl Response {
    /// Answer texts only, in question order
    pub fn texts(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.answer.clone()).collect()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| !a.resolved)
    }
}
