/// Record identifier: prefix, the last six digits of a millisecond
/// timestamp, then a random number in 0..100 (not padded).
///
/// Collisions are possible and not handled.
pub fn generate_id(prefix: &str, now_millis: i64, roll: u8) -> String {
    let digits = now_millis.unsigned_abs().to_string();
    let tail = &digits[digits.len().saturating_sub(6)..];
    format!("{}{}{}", prefix, tail, roll % 100)
}

/// Source of identifiers for newly created records.
pub trait IdSource {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Identifier source over a fixed clock reading and roll. Each call bumps the
/// roll so consecutive ids in one action stay distinct.
#[derive(Debug, Clone)]
pub struct ClockIds {
    pub now_millis: i64,
    pub roll: u8,
}

impl ClockIds {
    pub fn new(now_millis: i64, roll: u8) -> Self {
        Self { now_millis, roll }
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = generate_id(prefix, self.now_millis, self.roll);
        self.roll = (self.roll + 1) % 100;
        id
    }
}
