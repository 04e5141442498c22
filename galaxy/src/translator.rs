use crate::error::GalaxyError;
use crate::GalaxyResult;
use std::collections::{BTreeMap, HashMap};

/// A dictionary from alien symbols to roman digits
pub trait SymbolTable {
    fn digit(&self, symbol: &str) -> Option<char>;
}

impl SymbolTable for HashMap<String, char> {
    fn digit(&self, symbol: &str) -> Option<char> {
        self.get(symbol).copied()
    }
}

impl SymbolTable for BTreeMap<String, char> {
    fn digit(&self, symbol: &str) -> Option<char> {
        self.get(symbol).copied()
    }
}

/// Translate alien symbols into the roman numeral their digits spell out.
///
/// Stops at the first symbol missing from `table`. The result is upper-cased
/// but not validated; pass it to [`crate::numeral::decode`] for that.
pub fn translate<'s, T, I>(table: &T, symbols: I) -> GalaxyResult<String>
where
    T: SymbolTable + ?Sized,
    I: IntoIterator<Item = &'s str>,
{
    let mut roman = String::new();
    for symbol in symbols {
        let digit = table
            .digit(symbol)
            .ok_or_else(|| GalaxyError::UnknownSymbol(symbol.to_string()))?;
        roman.push(digit);
    }
    Ok(roman.to_ascii_uppercase())
}
