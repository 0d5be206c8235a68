use derive_more::Display;
use validator::validate_email;

#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim();
        if validate_email(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err("invalid email".into())
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
