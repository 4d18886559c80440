use std::borrow::Cow;

/// Quotes a field when it holds a comma, quote or line break, doubling
/// embedded quotes.
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    }
    else {
        Cow::Borrowed(field)
    }
}

/// One CRLF-terminated record.
pub fn record<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|f| escape(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str("\r\n");
    line
}

#[derive(Debug, Default)]
pub struct CsvDocument {
    content: String,
    rows: usize,
}

impl CsvDocument {
    pub fn with_header(header: &[&str]) -> Self {
        Self {
            content: record(header),
            rows: 0,
        }
    }

    pub fn push<S: AsRef<str>>(&mut self, fields: &[S]) {
        self.content.push_str(&record(fields));
        self.rows += 1;
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn as_str(&self) -> &str { &self.content }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_left_alone() {
        assert_eq!(escape("Jazz Bar La Cava"), "Jazz Bar La Cava");
        assert!(matches!(escape("music"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_special_fields_are_quoted() {
        assert_eq!(escape("Madrid, España"), "\"Madrid, España\"");
        assert_eq!(escape("say \"hola\""), "\"say \"\"hola\"\"\"");
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_document_counts_rows() {
        let mut doc = CsvDocument::with_header(&["id", "title"]);
        doc.push(&["1", "Yoga, al aire libre"]);
        doc.push(&["2".to_string(), String::new()]);

        assert_eq!(doc.rows(), 2);
        assert_eq!(
            doc.as_str(),
            "id,title\r\n1,\"Yoga, al aire libre\"\r\n2,\r\n"
        );
    }
}
