use serde::Deserialize;

/// The set of fields the deployed RSVP form collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Name, email and attendance.
    Email,
    /// Name, phone, optional email and attendance.
    Phone,
    /// Like `Phone`, plus the number of adults and kids coming.
    #[default]
    Guests,
}

impl FormVariant {
    pub fn requires_email(self) -> bool {
        matches!(self, Self::Email)
    }

    pub fn collects_phone(self) -> bool {
        matches!(self, Self::Phone | Self::Guests)
    }

    pub fn collects_guest_counts(self) -> bool {
        matches!(self, Self::Guests)
    }
}
