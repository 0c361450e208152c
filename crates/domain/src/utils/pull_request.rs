//! Pull-request description helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder replaced by the ticket number.
pub const TICKET_PLACEHOLDER: &str = "#{ticketId}";
/// Used when no ticket number can be found.
pub const FALLBACK_TICKET_ID: &str = "TICKET-ID";

/// Checklist template pasted into new pull requests.
pub const PR_TEMPLATE: &str = "
---
## Type of change
- [ ] Bug fix
- [ ] New feature
- [ ] Enhancement/Refactor
- [ ] Documentation update
- [ ] Other (please describe):
---
## Related work items
#{ticketId}
---
## Checklist for Developer Self-Test
### Code Quality & Functionality
- [x] Code builds successfully without errors or warnings
- [x] Linting passes locally
- [x] No unused code or console logs
### UI/UX (if applicable)
- [x] Verified layout in different screen sizes (desktop, tablet, mobile)
### Functionality & Business Logic
- [x] Main functionality works as expected
- [x] Edge cases handled (e.g., null values, error states)
- [x] Error and loading states are properly handled
### Evidence
";

static TICKET_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("TICKET_ID_REGEX should compile - this is a bug"));

/// Fill the template's ticket placeholder.
pub fn render_pr_template(ticket_id: Option<&str>) -> String {
    let ticket_id = ticket_id.map(str::trim).filter(|id| !id.is_empty()).unwrap_or(FALLBACK_TICKET_ID);
    PR_TEMPLATE.replacen(TICKET_PLACEHOLDER, ticket_id, 1)
}

/// First run of digits in `text`, e.g. a branch or PR title.
pub fn extract_ticket_id(text: &str) -> Option<String> {
    TICKET_ID_REGEX.find(text).map(|m| m.as_str().to_string())
}

/// Message asking the channel to review a pull request.
pub fn review_request_message(pr_link: &str) -> String {
    format!("{pr_link}\n@here please help me to review above PR")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_ticket_id() {
        let rendered = render_pr_template(Some("18540"));
        assert!(rendered.contains("## Related work items\n18540\n"));
        assert!(!rendered.contains(TICKET_PLACEHOLDER));
    }

    #[test]
    fn falls_back_when_ticket_missing() {
        assert!(render_pr_template(None).contains(FALLBACK_TICKET_ID));
        assert!(render_pr_template(Some("  ")).contains(FALLBACK_TICKET_ID));
    }

    #[test]
    fn extracts_first_digit_run() {
        assert_eq!(extract_ticket_id("feature/19113-brands-carousel-2"), Some("19113".into()));
        assert_eq!(extract_ticket_id("no digits"), None);
    }

    #[test]
    fn review_message_mentions_channel() {
        assert_eq!(
            review_request_message("https://example.test/pr/1"),
            "https://example.test/pr/1\n@here please help me to review above PR"
        );
    }
}
