use crate::diagnostic::Diagnostic;
use crate::rules::ValidationRule;
use formcraft_schema::Schema;
use regex::Regex;

/// Absolute http(s) URL or a site-relative path
const REDIRECT_PATTERN: &str = r"^(https?://[^\s/?#]+[^\s]*|/[^\s]*)$";

/// The post-submit redirect must be something a browser can follow
pub struct RedirectUrlRule {
    pattern: Option<Regex>,
}

impl RedirectUrlRule {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(REDIRECT_PATTERN).ok(),
        }
    }
}

impl Default for RedirectUrlRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for RedirectUrlRule {
    fn name(&self) -> &'static str {
        "redirect-url"
    }

    fn description(&self) -> &'static str {
        "Warn about redirect URLs that are neither absolute http(s) nor site-relative"
    }

    fn check_schema(&self, schema: &Schema) -> Vec<Diagnostic> {
        let (Some(pattern), Some(url)) = (&self.pattern, &schema.settings.redirect_url) else {
            return Vec::new();
        };
        if pattern.is_match(url.trim()) {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            "redirect-url",
            format!("Redirect URL '{}' is not a valid http(s) URL or path", url),
        )
        .with_suggestion("Use a full URL such as https://example.com/thanks or a path such as /thanks")]
    }
}
