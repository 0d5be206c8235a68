pub mod attendance;
pub mod email;
pub mod guests;
pub mod name;
pub mod phone;
pub mod variant;

use serde::Deserialize;
use serde_json::Value;

use self::attendance::Attendance;
use self::email::Email;
use self::guests::{GuestCount, GuestCounts};
use self::name::Name;
use self::phone::Phone;
use self::variant::FormVariant;

pub const NO_MESSAGE: &str = "No message provided.";

/// The RSVP form as submitted, before any checks.
///
/// Every field is optional here so that a missing field is reported by
/// [`RsvpSubmission::validate`] with a readable message instead of a decoding error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RsvpForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub attendance: Option<String>,
    pub adults: Option<Value>,
    pub kids: Option<Value>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RsvpSubmission {
    pub name: Name,
    pub email: Option<Email>,
    pub phone: Option<Phone>,
    pub attendance: Attendance,
    pub guests: Option<GuestCounts>,
    pub message: String,
}

impl RsvpSubmission {
    /// Checks `form` against the fields `variant` collects.
    ///
    /// The error is meant to be shown to the guest as is.
    pub fn validate(form: RsvpForm, variant: FormVariant) -> Result<Self, String> {
        let mut missing = Vec::new();

        let name = non_blank(form.name);
        if name.is_none() {
            missing.push("name");
        }

        let email = non_blank(form.email);
        if variant.requires_email() && email.is_none() {
            missing.push("email");
        }

        let phone = if variant.collects_phone() {
            let phone = non_blank(form.phone);
            if phone.is_none() {
                missing.push("phone");
            }
            phone
        } else {
            None
        };

        let attendance = form.attendance.and_then(|a| Attendance::try_from(a).ok());
        if attendance.is_none() {
            missing.push("attendance");
        }

        let (Some(name), Some(attendance)) = (name, attendance) else {
            return Err(required_message(&missing));
        };
        if !missing.is_empty() {
            return Err(required_message(&missing));
        }

        let name = Name::try_from(name).map_err(|_| "Name is too long.".to_string())?;

        let phone = phone
            .map(Phone::try_from)
            .transpose()
            .map_err(|_| "Please provide a valid phone number.".to_string())?;

        let email = email
            .map(Email::try_from)
            .transpose()
            .map_err(|_| "Please provide a valid email address.".to_string())?;

        let guests = if variant.collects_guest_counts() {
            let counts = form
                .adults
                .zip(form.kids)
                .ok_or_else(|| "guest counts are missing".to_string())
                .and_then(|(adults, kids)| {
                    Ok(GuestCounts {
                        adults: GuestCount::try_from(&adults)?,
                        kids: GuestCount::try_from(&kids)?,
                    })
                })
                .map_err(|_| "Adults and kids must be valid numbers.".to_string())?;

            if attendance.is_affirmative() && counts.total() == 0 {
                return Err("Please update number of guests.".into());
            }
            Some(counts)
        } else {
            None
        };

        let message = non_blank(form.message).unwrap_or_else(|| NO_MESSAGE.to_string());

        Ok(Self {
            name,
            email,
            phone,
            attendance,
            guests,
            message,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// "Name is required.", "Name and phone are required.",
/// "Name, phone, and attendance are required."
fn required_message(missing: &[&str]) -> String {
    let list = match missing {
        [] => return "Required fields are missing.".into(),
        [only] => return format!("{} is required.", capitalize(only)),
        [first, second] => format!("{} and {second}", capitalize(first)),
        [first, rest @ .., last] => {
            let mut list = capitalize(first);
            for field in rest {
                list.push_str(", ");
                list.push_str(field);
            }
            format!("{list}, and {last}")
        }
    };
    format!("{list} are required.")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
