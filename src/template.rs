use tracing::debug;

/// Expand a selector template by substituting one generated value.
///
/// Only the first occurrence of the placeholder is replaced. A template
/// without the placeholder is returned unchanged; that keeps static
/// selectors usable with the search loop, at the cost of silently masking
/// a mistyped placeholder, so we log it.
pub fn expand(template: &str, placeholder: &str, value: u64) -> String {
    if !template.contains(placeholder) {
        debug!(
            "Placeholder '{}' not found in template '{}'; using template as-is",
            placeholder, template
        );
        return template.to_string();
    }

    template.replacen(placeholder, &value.to_string(), 1)
}

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;
