use crate::domain::rsvp::RsvpSubmission;

/// Everyone who hears about a new RSVP. Not configurable per request.
pub const RECIPIENTS: [&str; 2] = ["sruthipai@gmail.com", "rajeeshrshenoy87@gmail.com"];

/// Format of the "Submitted" line, e.g. `April 11, 2026 at 6:00 PM`.
pub const SUBMITTED_AT_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

/// An email ready to hand over to a [`Mailer`](super::Mailer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundNotification {
    pub recipients: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutboundNotification {
    pub fn compose(submission: &RsvpSubmission, submitted_at: &str) -> Self {
        let mut fields = vec![("Guest Name", submission.name.to_string())];
        if let Some(email) = &submission.email {
            fields.push(("Email", email.to_string()));
        }
        if let Some(phone) = &submission.phone {
            fields.push(("Phone", phone.to_string()));
        }
        fields.push(("Attendance", submission.attendance.to_string()));
        if let Some(guests) = &submission.guests {
            fields.push(("Adults", guests.adults.to_string()));
            fields.push(("Kids", guests.kids.to_string()));
        }
        fields.push(("Message", submission.message.clone()));
        fields.push(("Submitted", submitted_at.to_owned()));

        let text_body = std::iter::once("New Birthday RSVP".to_string())
            .chain(fields.iter().map(|(label, value)| format!("{label}: {value}")))
            .collect::<Vec<_>>()
            .join("\n");

        let mut html_body = String::from("<h2>New Birthday RSVP</h2>\n");
        for (label, value) in &fields {
            html_body.push_str(&format!(
                "<p><strong>{label}:</strong> {}</p>\n",
                escape_html(value)
            ));
        }

        Self {
            recipients: RECIPIENTS.iter().map(|r| r.to_string()).collect(),
            reply_to: submission.email.as_ref().map(|e| e.to_string()),
            subject: format!("RSVP: {} ({})", submission.name, submission.attendance),
            text_body,
            html_body,
        }
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}
