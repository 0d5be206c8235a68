use derive_more::Display;

/// The guest's answer, usually "yes" or "no". Free-form values are kept as given.
#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct Attendance(String);

impl Attendance {
    pub fn is_affirmative(&self) -> bool {
        self.0.eq_ignore_ascii_case("yes")
    }
}

impl TryFrom<String> for Attendance {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() {
            return Err("attendance is empty".into());
        }

        Ok(Self(value.to_owned()))
    }
}

impl AsRef<str> for Attendance {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
