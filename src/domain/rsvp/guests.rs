use derive_more::Display;
use serde_json::Value;

/// A non-negative whole number of guests.
///
/// Browsers send the counts either as JSON numbers or as the raw input string,
/// so both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct GuestCount(u32);

impl GuestCount {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<&Value> for GuestCount {
    type Error = String;
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .ok_or_else(|| format!("{value} is not a number"))?;

        if !number.is_finite() || number < 0.0 || number.fract() != 0.0 {
            return Err(format!("{number} is not a valid guest count"));
        }

        if number > f64::from(u32::MAX) {
            return Err(format!("{number} is too large"));
        }

        Ok(Self(number as u32))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GuestCounts {
    pub adults: GuestCount,
    pub kids: GuestCount,
}

impl GuestCounts {
    pub fn total(&self) -> u64 {
        u64::from(self.adults.get()) + u64::from(self.kids.get())
    }
}
