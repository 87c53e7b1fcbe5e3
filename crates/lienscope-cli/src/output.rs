use std::io::Write;

use serde::Serialize;

use crate::error::CliError;

/// Writes one JSON document to stdout.
pub fn render<T: Serialize>(document: &T, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    write_document(&mut stdout, document, pretty)
}

pub fn write_document<W, T>(writer: &mut W, document: &T, pretty: bool) -> Result<(), CliError>
where
    W: Write,
    T: Serialize,
{
    let rendered = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };

    writeln!(writer, "{rendered}")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_document_is_a_single_line() {
        let mut buffer = Vec::new();

        write_document(&mut buffer, &json!({"a": [1, 2], "b": {"c": true}}), false)
            .expect("writes");

        let rendered = String::from_utf8(buffer).expect("utf8");
        assert_eq!(rendered, "{\"a\":[1,2],\"b\":{\"c\":true}}\n");
    }

    #[test]
    fn pretty_document_spans_lines() {
        let mut buffer = Vec::new();

        write_document(&mut buffer, &json!({"a": 1}), true).expect("writes");

        let rendered = String::from_utf8(buffer).expect("utf8");
        assert!(rendered.lines().count() > 1);
    }
}
