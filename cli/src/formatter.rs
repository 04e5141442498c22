use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use galaxy::question::render_credits;
use galaxy::{Lexicon, Response};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// One answer per line, in question order
    pub fn format_answers(&self, response: &Response) -> String {
        let mut output = String::new();
        for answer in &response.answers {
            output.push_str(&answer.answer);
            output.push('\n');
        }
        output
    }

    pub fn format_lexicon(
        &self,
        lexicon: &Lexicon,
        definitions: usize,
        declarations: usize,
        questions: usize,
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Learned from {} definitions and {} declarations ({} questions not answered)\n\n",
            definitions, declarations, questions
        ));

        output.push_str(&format!("symbols ({}):\n", lexicon.symbols().len()));
        if !lexicon.symbols().is_empty() {
            output.push_str(&self.format_symbols_table(lexicon));
            output.push('\n');
        }

        output.push_str(&format!("\nmetals ({}):\n", lexicon.metals().len()));
        if !lexicon.metals().is_empty() {
            output.push_str(&self.format_metals_table(lexicon));
            output.push('\n');
        }

        output
    }

    fn format_symbols_table(&self, lexicon: &Lexicon) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Symbol").set_alignment(CellAlignment::Left),
            Cell::new("Numeral").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Right),
        ]));

        for (symbol, digit) in lexicon.symbols() {
            let value = galaxy::decode(&digit.to_string())
                .map(|v| v.to_string())
                .unwrap_or_default();
            table.add_row(Row::from(vec![
                Cell::new(symbol),
                Cell::new(digit),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }

    fn format_metals_table(&self, lexicon: &Lexicon) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Metal").set_alignment(CellAlignment::Left),
            Cell::new("Credits per unit").set_alignment(CellAlignment::Right),
        ]));

        for (metal, unit_value) in lexicon.metals() {
            table.add_row(Row::from(vec![
                Cell::new(metal),
                Cell::new(render_credits(*unit_value)).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy::Engine;

    #[test]
    fn test_format_answers_one_per_line() {
        let mut engine = Engine::new();
        let response = engine
            .run(&["glob is I", "how much is glob ?", "what ?"])
            .unwrap();
        let output = Formatter::default().format_answers(&response);
        assert_eq!(
            output,
            "glob is 1\nI have no idea what you are talking about\n"
        );
    }

    #[test]
    fn test_format_lexicon_lists_symbols_and_metals() {
        let mut engine = Engine::new();
        engine
            .learn(&["glob is I", "pish is X", "glob glob Iron is 391 Credits"])
            .unwrap();
        let output = Formatter::default().format_lexicon(engine.lexicon(), 2, 1, 0);

        assert!(output.contains("symbols (2)"));
        assert!(output.contains("pish"));
        assert!(output.contains("10"));
        assert!(output.contains("metals (1)"));
        assert!(output.contains("195.5"));
    }
}
