//! Status and role enums for POS entities.

use serde::{Deserialize, Serialize};

use crate::Email;

/// Staff account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access including settings and staff management.
    Owner,
    /// Store management without ownership-level settings.
    Admin,
    /// Cashier-level access: sell, invoice, reports.
    Operator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Admin => write!(f, "admin"),
            Self::Operator => write!(f, "operator"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "operator" => Ok(Self::Operator),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// The business mode a logged-in session operates in.
///
/// Arjuna runs a digital-printing counter and a uniform/retail counter on the
/// same system; the staff account's email domain decides which one a session
/// sees. The kind themes the front-end and filters catalog visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Large-format printing counter (area-priced goods).
    Printing,
    /// Uniform/retail counter (per-unit goods).
    Retail,
    /// No domain match: both catalogs visible.
    #[default]
    General,
}

impl StoreKind {
    /// Derive the store kind from a staff email domain.
    ///
    /// `digital` domains map to the printing counter, `seragam` domains to
    /// the retail counter, anything else to general.
    #[must_use]
    pub fn for_email(email: &Email) -> Self {
        let domain = email.domain();
        if domain.contains("digital") {
            Self::Printing
        } else if domain.contains("seragam") {
            Self::Retail
        } else {
            Self::General
        }
    }

    /// Human-readable store label used on receipts.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Printing => "ARJUNA PRINT",
            Self::Retail => "ARJUNA RETAIL",
            Self::General => "ARJUNA POS",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Printing => write!(f, "printing"),
            Self::Retail => write!(f, "retail"),
            Self::General => write!(f, "general"),
        }
    }
}

/// How a transaction was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash over the counter; requires a tendered amount.
    Cash,
    /// QRIS / bank transfer; always treated as exact payment.
    Qris,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Qris => write!(f, "qris"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" | "tunai" => Ok(Self::Cash),
            "qris" | "transfer" => Ok(Self::Qris),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Thermal printer paper width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaperSize {
    /// 58 mm roll (32 characters per line).
    #[default]
    #[serde(rename = "58mm")]
    Mm58,
    /// 80 mm roll (48 characters per line).
    #[serde(rename = "80mm")]
    Mm80,
}

impl PaperSize {
    /// Printable characters per receipt line.
    #[must_use]
    pub const fn columns(&self) -> usize {
        match self {
            Self::Mm58 => 32,
            Self::Mm80 => 48,
        }
    }
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mm58 => write!(f, "58mm"),
            Self::Mm80 => write!(f, "80mm"),
        }
    }
}
