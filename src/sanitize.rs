//! Post body sanitization

use ammonia::Builder;

/// Sanitizer for outgoing post bodies
///
/// Reduces rich text to the safe HTML subset the host allows in post
/// content, after stripping literal non-breaking-space entities that
/// wysiwyg editors leave behind.
#[derive(Debug, Clone)]
pub struct ContentSanitizer {
    allowed_tags: Vec<String>,
    allowed_attributes: Vec<String>,
}

impl ContentSanitizer {
    /// Create a sanitizer with the post-content allowlist
    pub fn new() -> Self {
        Self {
            allowed_tags: vec![
                "a", "abbr", "b", "blockquote", "br", "cite", "code", "dd", "del", "div", "dl",
                "dt", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img", "ins", "li",
                "ol", "p", "pre", "q", "s", "span", "strong", "sub", "sup", "table", "tbody",
                "td", "th", "thead", "tr", "ul",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            allowed_attributes: vec!["alt", "class", "href", "id", "src", "title"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Set allowed HTML tags
    pub fn with_allowed_tags(mut self, tags: Vec<String>) -> Self {
        self.allowed_tags = tags;
        self
    }

    /// Set allowed attributes
    pub fn with_allowed_attributes(mut self, attributes: Vec<String>) -> Self {
        self.allowed_attributes = attributes;
        self
    }

    /// Sanitize a post body for delivery
    pub fn sanitize(&self, html: &str) -> String {
        let stripped = html.replace("&nbsp;", "");

        let mut builder = Builder::default();
        builder.tags(self.allowed_tags.iter().map(|s| s.as_str()).collect());
        builder.generic_attributes(self.allowed_attributes.iter().map(|s| s.as_str()).collect());
        builder.strip_comments(true);

        builder.clean(&stripped).to_string()
    }
}

impl Default for ContentSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
