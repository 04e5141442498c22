// Numeral and translation tests
mod numeral;
