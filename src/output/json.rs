//! JSON output formatting

use std::io;

use crate::scope::OutputRow;

/// Render rows as a pretty-printed JSON array.
pub fn rows_to_json(rows: &[OutputRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// Print rows as pretty-printed JSON to stdout.
pub fn print_json(rows: &[OutputRow]) -> io::Result<()> {
    let json = rows_to_json(rows).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{SymbolMode, format_rows};
    use crate::test_utils::{computed_input, selected_input};

    #[test]
    fn test_rows_to_json_shape() {
        let rows = format_rows(&computed_input(), &selected_input(), None, SymbolMode::ThreeState)
            .unwrap();
        let json = rows_to_json(&rows).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 9);
        assert_eq!(array[0]["id"], "37e37fbe");
        assert_eq!(array[0]["level"], 1);
        assert_eq!(array[0]["setSize"], 3);
        assert_eq!(array[0]["includedSymbol"], "*");
        assert_eq!(array[6]["selectedSymbol"], "+");
    }

    #[test]
    fn test_empty_rows_to_json() {
        assert_eq!(rows_to_json(&[]).unwrap(), "[]");
    }
}
