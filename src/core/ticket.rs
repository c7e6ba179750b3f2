use crate::error::{LottoTicketError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How many numbers every ticket carries
pub const NUMBER_COUNT: usize = 6;

/// Separator between numbers inside the `Setnumber` column
pub const NUMBER_SEPARATOR: &str = ", ";

/// Date format used on disk and in prompts
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of columns in a serialized `Auto` row
const AUTO_FIELD_COUNT: usize = 5;

/// Decimal ticket identifier
///
/// Compared as text, so `"01"` and `"1"` are different ids, while its
/// numeric value drives next-id assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct TicketId {
    text: String,
    value: u64,
}

impl TicketId {
    /// Mint an id from a counter value
    pub fn from_value(value: u64) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }

    /// Parse an id read back from storage
    pub fn parse_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LottoTicketError::validation(format!(
                "ticket id must be decimal digits, got '{s}'"
            )));
        }
        let value = s.parse::<u64>().map_err(|_| {
            LottoTicketError::validation(format!("ticket id '{s}' is out of range"))
        })?;
        Ok(Self {
            text: s.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.text
    }
}

/// The six numbers on a ticket, kept as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Numbers([String; NUMBER_COUNT]);

impl Numbers {
    /// Validate and wrap a list of numbers
    ///
    /// Tokens may not contain a comma; the on-disk column is comma separated.
    pub fn new(values: Vec<String>) -> Result<Self> {
        let found = values.len();
        let array: [String; NUMBER_COUNT] = values.try_into().map_err(|_| {
            LottoTicketError::validation(format!(
                "setnumber must have exactly {NUMBER_COUNT} elements, found {found}"
            ))
        })?;
        if let Some(bad) = array.iter().find(|n| n.contains(',')) {
            return Err(LottoTicketError::validation(format!(
                "number '{bad}' must not contain a comma"
            )));
        }
        Ok(Self(array))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Render as the single `Setnumber` column
    pub fn joined(&self) -> String {
        self.0.join(NUMBER_SEPARATOR)
    }

    /// Split a `Setnumber` column back into six numbers
    fn split(field: &str) -> Result<Self> {
        Self::new(field.split(NUMBER_SEPARATOR).map(str::to_string).collect())
    }
}

impl TryFrom<Vec<String>> for Numbers {
    type Error = LottoTicketError;

    fn try_from(values: Vec<String>) -> Result<Self> {
        Self::new(values)
    }
}

/// Tag stored in the `Type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTag {
    Auto,
}

impl KindTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KindTag {
    type Err = LottoTicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Auto" => Ok(Self::Auto),
            other => Err(LottoTicketError::validation(format!(
                "unsupported ticket type '{other}'"
            ))),
        }
    }
}

/// Variant-specific payload of a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TicketKind {
    Auto { product: String },
}

impl TicketKind {
    pub const fn tag(&self) -> KindTag {
        match self {
            Self::Auto { .. } => KindTag::Auto,
        }
    }
}

/// A single lottery ticket
///
/// Tickets are immutable once built; the store replaces rather than edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    date: NaiveDate,
    #[serde(flatten)]
    kind: TicketKind,
    numbers: Numbers,
}

impl Ticket {
    /// Build an `Auto` ticket
    pub fn auto(
        id: TicketId,
        date: NaiveDate,
        product: impl Into<String>,
        numbers: Numbers,
    ) -> Self {
        Self {
            id,
            date,
            kind: TicketKind::Auto {
                product: product.into(),
            },
            numbers,
        }
    }

    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn kind(&self) -> &TicketKind {
        &self.kind
    }

    pub const fn numbers(&self) -> &Numbers {
        &self.numbers
    }

    /// Product label of an `Auto` ticket
    pub fn product(&self) -> &str {
        match &self.kind {
            TicketKind::Auto { product } => product,
        }
    }

    /// One-line human readable summary
    pub fn describe(&self) -> String {
        match &self.kind {
            TicketKind::Auto { product } => format!(
                "Auto Ticket [ID: {}, Date: {}, product: {}, setnumber: {}]",
                self.id,
                self.date.format(DATE_FORMAT),
                product,
                self.numbers.joined()
            ),
        }
    }

    /// Positional fields for one CSV row
    pub fn serialize(&self) -> Vec<String> {
        let mut fields = vec![
            self.id.to_string(),
            self.kind.tag().to_string(),
            self.date.format(DATE_FORMAT).to_string(),
        ];
        match &self.kind {
            TicketKind::Auto { product } => fields.push(product.clone()),
        }
        fields.push(self.numbers.joined());
        fields
    }

    /// Rebuild a ticket of variant `tag` from the fields `serialize` produced
    ///
    /// Errors carry line 0; the store fills in the real line number.
    pub fn deserialize(tag: KindTag, fields: &[&str]) -> Result<Self> {
        match tag {
            KindTag::Auto => Self::deserialize_auto(fields),
        }
    }

    fn deserialize_auto(fields: &[&str]) -> Result<Self> {
        let [id, _tag, date, product, numbers] = fields else {
            return Err(LottoTicketError::malformed(
                0,
                format!(
                    "expected {AUTO_FIELD_COUNT} fields, found {}",
                    fields.len()
                ),
            ));
        };

        let id = TicketId::parse_str(id).map_err(|e| malformed_from(&e))?;
        let date = parse_date(date).map_err(|e| malformed_from(&e))?;
        let numbers = Numbers::split(numbers).map_err(|e| malformed_from(&e))?;

        Ok(Self::auto(id, date, *product, numbers))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        LottoTicketError::validation(format!("'{s}' is not a valid date (expected YYYY-MM-DD)"))
    })
}

fn malformed_from(err: &LottoTicketError) -> LottoTicketError {
    let reason = match err {
        LottoTicketError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    };
    LottoTicketError::malformed(0, reason)
}
