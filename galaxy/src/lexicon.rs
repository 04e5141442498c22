use crate::translator::{translate, SymbolTable};
use crate::{numeral, GalaxyResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// What the engine has learned from definition and declaration lines
///
/// Symbols map to a single upper-case roman digit. Metals map to their unit
/// value: credits per one unit of decoded numeral value. Later entries
/// replace earlier ones for the same key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lexicon {
    symbols: BTreeMap<String, char>,
    metals: BTreeMap<String, f64>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `symbol` as standing for `digit`. Returns the digit it replaced.
    pub fn define_symbol(&mut self, symbol: impl Into<String>, digit: char) -> Option<char> {
        self.symbols.insert(symbol.into(), digit.to_ascii_uppercase())
    }

    pub fn set_unit_value(&mut self, metal: impl Into<String>, unit_value: f64) -> Option<f64> {
        self.metals.insert(metal.into(), unit_value)
    }

    /// Unit value of a metal, matching its name ignoring case
    pub fn unit_value(&self, metal: &str) -> Option<f64> {
        self.metals
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(metal))
            .map(|(_, value)| *value)
    }

    pub fn symbols(&self) -> &BTreeMap<String, char> {
        &self.symbols
    }

    pub fn metals(&self) -> &BTreeMap<String, f64> {
        &self.metals
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.metals.is_empty()
    }

    /// Translate an alien numeral sequence and decode it
    pub fn value_of<'s, I>(&self, symbols: I) -> GalaxyResult<u32>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let roman = translate(self, symbols)?;
        numeral::decode(&roman)
    }
}

impl SymbolTable for Lexicon {
    fn digit(&self, symbol: &str) -> Option<char> {
        self.symbols.get(symbol).copied()
    }
}
