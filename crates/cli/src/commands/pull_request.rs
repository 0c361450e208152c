use workdeck_domain::utils::pull_request::{
    extract_ticket_id, render_pr_template, review_request_message,
};

/// Ticket for the template: explicit id first, then the first number in `from`.
fn resolve_ticket(ticket: Option<&str>, from: Option<&str>) -> Option<String> {
    ticket.map(str::to_string).or_else(|| from.and_then(extract_ticket_id))
}

pub fn template(ticket: Option<&str>, from: Option<&str>) {
    let ticket = resolve_ticket(ticket, from);
    println!("{}", render_pr_template(ticket.as_deref()));
}

pub fn review_message(pr_link: &str) {
    println!("{}", review_request_message(pr_link));
}
