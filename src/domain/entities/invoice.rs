use std::collections::HashMap;
use std::fmt;

/// Placeholder carried by any extracted field with no matching element.
pub const FIELD_NOT_FOUND: &str = "Não encontrado";

/// Fields read from the first item of an NF-e document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceExtract {
    pub product_name: String,
    pub cfop_code: String,
    pub declared_icms_rate: String,
}

impl InvoiceExtract {
    pub fn new(
        product_name: Option<String>,
        cfop_code: Option<String>,
        declared_icms_rate: Option<String>,
    ) -> Self {
        Self {
            product_name: product_name.unwrap_or_else(|| FIELD_NOT_FOUND.to_string()),
            cfop_code: cfop_code.unwrap_or_else(|| FIELD_NOT_FOUND.to_string()),
            declared_icms_rate: declared_icms_rate.unwrap_or_else(|| FIELD_NOT_FOUND.to_string()),
        }
    }
}

/// CFOP code to expected ICMS rate. Rates are kept as text and compared as
/// text; "18" and "18.0" are distinct entries.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, String>,
}

impl RateTable {
    pub fn new(rates: HashMap<String, String>) -> Self {
        Self { rates }
    }

    pub fn expected_rate(&self, cfop: &str) -> Option<&str> {
        self.rates.get(cfop).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rates.iter().map(|(c, r)| (c.as_str(), r.as_str()))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let rates = [("5101", "18"), ("5102", "18"), ("6102", "12")]
            .into_iter()
            .map(|(c, r)| (c.to_string(), r.to_string()))
            .collect();
        Self { rates }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { rate: String },
    Divergence { expected: String, declared: String },
    Unmapped { cfop: String },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct { rate } => write!(f, "ICMS correto ({rate}%)."),
            Self::Divergence { expected, declared } => {
                write!(f, "Divergência: esperado {expected}%, encontrado {declared}%.")
            }
            Self::Unmapped { cfop } => write!(f, "CFOP {cfop} não mapeado."),
        }
    }
}

/// Outcome of a single validation call. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub product_name: String,
    pub cfop_code: String,
    pub declared_icms_rate: String,
    pub expected_icms_rate: Option<String>,
    pub verdict: Verdict,
}
