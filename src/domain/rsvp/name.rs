use derive_more::Display;
use unicode_segmentation::UnicodeSegmentation;

/// Name of the guest answering the invitation.
#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct Name(String);

impl TryFrom<String> for Name {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() {
            return Err("name is empty".into());
        }

        if value.graphemes(true).count() > 256 {
            return Err("name is too long".into());
        }

        Ok(Self(value.to_owned()))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
