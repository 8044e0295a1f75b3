//! Read-only view over a raw invoice/refund record.
//!
//! The upstream ERP hands back a loosely structured record; this module
//! derives normalized quantities from it — exact amounts, signs, and the
//! direction/kind classification — without ever mutating or validating the
//! record itself. Every failure mode (missing field, unknown currency,
//! unparseable amount, ambiguous classification) is absorbed as typed
//! absence, never raised.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use erplens_core::{RawRecord, ValueObject};

use crate::money::{Currency, Money, Sign};

/// Path of the raw classification field (`"<direction>_<kind>"`).
pub const TYPE_PATH: &str = "type";
/// Path of the ISO currency code: second element of the `currency_id` pair.
pub const CURRENCY_CODE_PATH: &str = "currency_id.1";
/// Path of the document total, in major units.
pub const AMOUNT_TOTAL_PATH: &str = "amount_total";
/// Path of the outstanding (unpaid) amount, in major units.
pub const RESIDUAL_PATH: &str = "residual";
/// Path of the partner's numeric id: first element of the `partner_id` pair.
pub const PARTNER_ID_PATH: &str = "partner_id.0";
/// Path of the partner's display name: second element of the pair.
pub const PARTNER_NAME_PATH: &str = "partner_id.1";

/// The direction a document moved: issued by the system (`out`) or received
/// from an external partner (`in`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }
}

/// What a document asks for: payment (`invoice`) or repayment of a prior
/// payment (`refund`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Refund,
}

impl DocumentKind {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "invoice" => Some(Self::Invoice),
            "refund" => Some(Self::Refund),
            _ => None,
        }
    }
}

/// Classification parsed from the raw `type` field.
///
/// A `None` half is unknown: the raw string had no `_` separator, or the
/// token fell outside the known domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub direction: Option<Direction>,
    pub kind: Option<DocumentKind>,
}

impl Classification {
    pub const UNKNOWN: Self = Self {
        direction: None,
        kind: None,
    };

    /// Parse `"<direction>_<kind...>"`: split on the first `_`, lower-case
    /// both halves. Both public getters go through this one parse, so they
    /// can never disagree about the same raw string.
    fn parse(raw: &str) -> Self {
        let Some((direction, kind)) = raw.split_once('_') else {
            warn!(raw, "classification field has no separator, treating as unknown");
            return Self::UNKNOWN;
        };

        let parsed = Self {
            direction: Direction::parse(&direction.to_ascii_lowercase()),
            kind: DocumentKind::parse(&kind.to_ascii_lowercase()),
        };
        if parsed.direction.is_none() || parsed.kind.is_none() {
            warn!(raw, "classification field carries unrecognized tokens");
        }
        parsed
    }

    /// Negative only for an outgoing refund. Every other combination —
    /// unknown halves included — stays positive.
    pub fn sign(&self) -> Sign {
        if self.direction == Some(Direction::Out) && self.kind == Some(DocumentKind::Refund) {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

impl ValueObject for Classification {}

/// Read-only accessor over a raw invoice/refund record.
///
/// Every getter is a pure function of the wrapped record: repeated calls
/// yield identical results, nothing is cached, and the record is never
/// mutated, so views are freely shareable across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceView {
    record: RawRecord,
}

impl InvoiceView {
    pub fn new(record: RawRecord) -> Self {
        Self { record }
    }

    /// The wrapped record.
    pub fn record(&self) -> &RawRecord {
        &self.record
    }

    /// Raw field access by dotted path; `None` when the path misses.
    pub fn field(&self, path: &str) -> Option<&Value> {
        self.record.get(path)
    }

    /// Raw field access with an eager fallback.
    pub fn field_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.record.get_or(path, default)
    }

    /// Raw field access with a deferred fallback, invoked only on a miss.
    pub fn field_or_else<F>(&self, path: &str, default: F) -> Cow<'_, Value>
    where
        F: FnOnce() -> Value,
    {
        self.record.get_or_else(path, default)
    }

    /// Currency/amount pair at `amount_path` as an absolute monetary value.
    ///
    /// Unavailable (`None`) when the amount is absent, the currency code is
    /// absent, not a string, or not in the ISO 4217 table, or the amount does
    /// not parse as a decimal.
    fn money_at(&self, amount_path: &str) -> Option<Money> {
        let amount = self.field(amount_path)?;
        let code = self.field(CURRENCY_CODE_PATH)?.as_str()?;

        let Some(currency) = Currency::from_code(code) else {
            debug!(code, "currency code not in the ISO 4217 table");
            return None;
        };

        let money = match amount {
            Value::String(text) => Money::parse(currency, text),
            Value::Number(number) => Money::parse(currency, &number.to_string()),
            _ => None,
        };
        if money.is_none() {
            debug!(%amount, amount_path, "amount did not parse as a decimal");
        }
        money.map(Money::abs)
    }

    /// Document total as an absolute monetary value.
    pub fn total_amount(&self) -> Option<Money> {
        self.money_at(AMOUNT_TOTAL_PATH)
    }

    /// Outstanding (unpaid) amount as an absolute monetary value.
    pub fn residual_amount(&self) -> Option<Money> {
        self.money_at(RESIDUAL_PATH)
    }

    /// Document total with the document sign applied.
    ///
    /// Absence propagates: `None` from [`Self::total_amount`] stays `None`.
    pub fn total_amount_signed(&self) -> Option<Money> {
        self.total_amount().map(|m| m.abs().apply_sign(self.sign()))
    }

    /// Outstanding amount with the document sign applied; absence propagates.
    pub fn residual_amount_signed(&self) -> Option<Money> {
        self.residual_amount().map(|m| m.abs().apply_sign(self.sign()))
    }

    /// Classification of the raw `type` field.
    pub fn classification(&self) -> Classification {
        match self.field(TYPE_PATH).and_then(Value::as_str) {
            Some(raw) => Classification::parse(raw),
            None => {
                debug!("record has no classification field");
                Classification::UNKNOWN
            }
        }
    }

    /// The direction the document moved; `None` when unknown.
    pub fn direction(&self) -> Option<Direction> {
        self.classification().direction
    }

    /// The kind of document; `None` when unknown.
    pub fn document_kind(&self) -> Option<DocumentKind> {
        self.classification().kind
    }

    /// Sign of the document: negative only for an outgoing refund.
    pub fn sign(&self) -> Sign {
        self.classification().sign()
    }

    /// The partner being invoiced (for `out` invoices or refunds): numeric id.
    pub fn partner_id(&self) -> Option<i64> {
        self.field(PARTNER_ID_PATH)?.as_i64()
    }

    /// The partner being invoiced: display name.
    pub fn partner_name(&self) -> Option<&str> {
        self.field(PARTNER_NAME_PATH)?.as_str()
    }
}

impl From<RawRecord> for InvoiceView {
    fn from(record: RawRecord) -> Self {
        Self::new(record)
    }
}
