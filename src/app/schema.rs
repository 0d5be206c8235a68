use serde::Serialize;

/// Body of every successful JSON response: `{ "ok": true }`.
#[derive(Serialize)]
pub struct Acknowledgement {
    pub ok: bool,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
