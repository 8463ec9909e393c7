//! Response bodies for mutations

use serde::Serialize;

/// Acknowledgement returned by delete, whether or not a record was removed
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub msg: &'static str,
}

impl Ack {
    pub fn ok() -> Self {
        Self { msg: "ok" }
    }
}
