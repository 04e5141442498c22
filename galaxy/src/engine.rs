use crate::classifier::{Classified, Classifier, Line};
use crate::question::{Question, Template};
use crate::tokenizer::{tokenize, Span};
use crate::{Answer, EngineConfig, GalaxyError, GalaxyResult, Lexicon, ResourceLimits, Response};
use tracing::{debug, trace};

/// The question answering engine.
///
/// Runs a batch of lines in two passes: first every definition and
/// declaration is learned, then every remaining line is answered. A question
/// may therefore rely on facts stated after it. The lexicon persists across
/// batches run on the same engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    lexicon: Lexicon,
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            lexicon: Lexicon::new(),
            config,
        }
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self::with_config(EngineConfig::default().with_limits(limits))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Answer every question in `lines`, returning one answer per question
    /// line in input order. Definition and declaration lines produce no
    /// output.
    pub fn process<S: AsRef<str>>(&mut self, lines: &[S]) -> GalaxyResult<Vec<String>> {
        Ok(self.run(lines)?.texts())
    }

    /// Like [`Engine::process`], with details about every answer
    pub fn run<S: AsRef<str>>(&mut self, lines: &[S]) -> GalaxyResult<Response> {
        let classified = self.learn(lines)?;

        let answers = classified
            .questions
            .iter()
            .map(|line| self.answer_line(*line))
            .collect();

        Ok(Response {
            answers,
            lexicon: self.lexicon.clone(),
        })
    }

    /// Classification pass only: learn from `lines` and return them
    /// partitioned by kind
    pub fn learn<'a, S: AsRef<str>>(&mut self, lines: &'a [S]) -> GalaxyResult<Classified<'a>> {
        self.check_limits(lines)?;
        let classified = Classifier::new(&self.config).partition(lines, &mut self.lexicon)?;
        debug!(
            definitions = classified.definitions.len(),
            declarations = classified.declarations.len(),
            questions = classified.questions.len(),
            "classified batch"
        );
        Ok(classified)
    }

    /// Answer a single question against what has been learned so far
    pub fn answer(&self, question: &str) -> String {
        self.answer_line(Line {
            number: 1,
            text: question,
        })
        .answer
    }

    fn answer_line(&self, line: Line<'_>) -> Answer {
        let tokens = tokenize(line.text);
        let template = Template::detect(&tokens);
        let result = Question::parse(&tokens)
            .and_then(|question| question.answer(&self.lexicon, &self.config.limits));

        match result {
            Ok(answer) => {
                trace!(line = line.number, %answer, "answered");
                Answer {
                    line: line.number,
                    question: line.text.to_string(),
                    template,
                    answer,
                    resolved: true,
                    reason: None,
                }
            }
            Err(err) => {
                debug!(line = line.number, question = line.text, error = %err, "no answer");
                Answer {
                    line: line.number,
                    question: line.text.to_string(),
                    template,
                    answer: self.config.fallback_answer.clone(),
                    resolved: false,
                    reason: Some(err.to_string()),
                }
            }
        }
    }

    fn check_limits<S: AsRef<str>>(&self, lines: &[S]) -> GalaxyResult<()> {
        let limits = &self.config.limits;

        if lines.len() > limits.max_lines {
            return Err(GalaxyError::ResourceLimitExceeded {
                limit_name: "max_lines".to_string(),
                limit_value: limits.max_lines.to_string(),
                actual_value: lines.len().to_string(),
                suggestion: "Split the input into smaller batches".to_string(),
            });
        }

        if let Some((index, line)) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.as_ref().len() > limits.max_line_bytes)
        {
            let text = line.as_ref();
            let err = GalaxyError::ResourceLimitExceeded {
                limit_name: "max_line_bytes".to_string(),
                limit_value: format!("{} bytes", limits.max_line_bytes),
                actual_value: format!("{} bytes", text.len()),
                suggestion: "Shorten the line".to_string(),
            };
            return Err(err.at_line(
                index + 1,
                text,
                Span {
                    start: 0,
                    end: text.len(),
                },
            ));
        }

        Ok(())
    }
}
