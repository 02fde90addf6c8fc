//! Minimal indenting XML writer
//!
//! Produces one element per line, two spaces per nesting level. Elements with no children are
//! written inline (`<tag attr="v">text</tag>`), or self-closed when the text is empty. Text and
//! attribute values are escaped.

use crate::error::ExportError;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Default)]
pub struct XmlWriter {
    output: String,
    open: Vec<String>,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose output starts with the XML declaration.
    pub fn with_declaration() -> Self {
        let mut writer = Self::new();
        writer.output.push_str(XML_DECLARATION);
        writer.output.push('\n');
        writer
    }

    fn push_indent(&mut self) {
        self.output.push_str(&"  ".repeat(self.open.len()));
    }

    fn push_start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.output.push('<');
        self.output.push_str(name);
        for (key, value) in attrs {
            self.output.push(' ');
            self.output.push_str(key);
            self.output.push_str("=\"");
            self.output.push_str(&escape_xml(value));
            self.output.push('"');
        }
    }

    /// Open an element that will have children.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.push_indent();
        self.push_start_tag(name, attrs);
        self.output.push_str(">\n");
        self.open.push(name.to_string());
        self
    }

    /// Close the innermost open element.
    pub fn close(&mut self) -> &mut Self {
        if let Some(name) = self.open.pop() {
            self.push_indent();
            self.output.push_str("</");
            self.output.push_str(&name);
            self.output.push_str(">\n");
        }
        self
    }

    /// A leaf element holding text.
    pub fn element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        if text.is_empty() {
            return self.empty(name, attrs);
        }
        self.push_indent();
        self.push_start_tag(name, attrs);
        self.output.push('>');
        self.output.push_str(&escape_xml(text));
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push_str(">\n");
        self
    }

    /// A self-closed element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.push_indent();
        self.push_start_tag(name, attrs);
        self.output.push_str("/>\n");
        self
    }

    /// The written document. Fails if an element was left open.
    pub fn finish(self) -> Result<String, ExportError> {
        match self.open.last() {
            Some(name) => Err(ExportError::Package(format!(
                "unclosed element <{}>",
                name
            ))),
            None => Ok(self.output),
        }
    }
}

/// Escape XML special characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_output() {
        let mut xml = XmlWriter::new();
        xml.open("root", &[("id", "1")])
            .element("leaf", &[], "text")
            .empty("blank", &[("a", "b")])
            .element("nothing", &[], "")
            .close();
        assert_eq!(
            xml.finish().unwrap(),
            "<root id=\"1\">\n  <leaf>text</leaf>\n  <blank a=\"b\"/>\n  <nothing/>\n</root>\n"
        );
    }

    #[test]
    fn test_declaration() {
        let mut xml = XmlWriter::with_declaration();
        xml.empty("root", &[]);
        assert_eq!(
            xml.finish().unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root/>\n"
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(
            escape_xml(r#"a < b & "c" > 'd'"#),
            "a &lt; b &amp; &quot;c&quot; &gt; &apos;d&apos;"
        );
        let mut xml = XmlWriter::new();
        xml.element("t", &[("title", "Tom & \"Jerry\"")], "<b>");
        assert_eq!(
            xml.finish().unwrap(),
            "<t title=\"Tom &amp; &quot;Jerry&quot;\">&lt;b&gt;</t>\n"
        );
    }

    #[test]
    fn test_unclosed_element_fails() {
        let mut xml = XmlWriter::new();
        xml.open("root", &[]);
        assert!(matches!(xml.finish(), Err(ExportError::Package(_))));
    }

    #[test]
    fn test_close_without_open_is_noop() {
        let mut xml = XmlWriter::new();
        xml.close();
        assert_eq!(xml.finish().unwrap(), "");
    }
}
