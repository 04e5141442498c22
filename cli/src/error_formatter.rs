use ariadne::{Color, Label, Report, ReportKind, Source};
use galaxy::GalaxyError;

/// Format a GalaxyError with fancy terminal output using Ariadne
pub fn format_error(error: &GalaxyError, source_name: &str) -> String {
    match error {
        GalaxyError::Statement {
            line,
            text,
            span,
            source,
        } => {
            let mut output = Vec::new();
            let source_id = format!("{}:{}", source_name, line);

            let mut report = Report::build(ReportKind::Error, &source_id, span.start)
                .with_message(format!("{} (in {} at line {})", source, source_name, line))
                .with_label(
                    Label::new((&source_id, span.start..span.end))
                        .with_message(label_for(source))
                        .with_color(Color::Red),
                );

            if let Some(help) = help_for(source) {
                report = report.with_help(help);
            }

            match report
                .finish()
                .write((&source_id, Source::from(text.as_str())), &mut output)
            {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => {
                    // Fallback to simple format
                    format!("Error: {}", error)
                }
            }
        }
        GalaxyError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        other => format!("Error: {}", other),
    }
}

fn label_for(error: &GalaxyError) -> &'static str {
    match error {
        GalaxyError::UnknownSymbol(_) => "not defined by any '<symbol> is <digit>' line",
        GalaxyError::MalformedCredits(_) => "expected a whole number",
        GalaxyError::InvalidNumeral(_) => "these symbols do not spell a valid numeral",
        GalaxyError::ResourceLimitExceeded { limit_name, .. } if limit_name == "max_line_bytes" => {
            "line is too long"
        }
        GalaxyError::ResourceLimitExceeded { .. } => "too many symbols",
        _ => "",
    }
}

fn help_for(error: &GalaxyError) -> Option<String> {
    match error {
        GalaxyError::UnknownSymbol(symbol) => {
            Some(format!("define it first, for example '{} is I'", symbol))
        }
        GalaxyError::MalformedCredits(_) => {
            Some("declarations look like 'glob glob Silver is 34 Credits'".to_string())
        }
        _ => None,
    }
}
