use derive_more::Display;

/// Contact number as typed by the guest. Only its presence is enforced.
#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct Phone(String);

impl TryFrom<String> for Phone {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() {
            return Err("phone is empty".into());
        }

        if value.chars().count() > 32 {
            return Err("phone is too long".into());
        }

        Ok(Self(value.to_owned()))
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
