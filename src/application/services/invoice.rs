use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    ports::InvoiceParser, DomainError, InvoiceExtract, RateTable, ValidationResult, Verdict,
};

/// Checks the declared ICMS rate of an NF-e's first item against the
/// configured CFOP rate table.
pub struct InvoiceService {
    parser: Arc<dyn InvoiceParser>,
    rates: RateTable,
}

impl InvoiceService {
    pub fn new(parser: Arc<dyn InvoiceParser>, rates: RateTable) -> Self {
        Self { parser, rates }
    }

    #[instrument(skip(self, xml), fields(len = xml.len()))]
    pub fn validate(&self, xml: &str) -> Result<ValidationResult, DomainError> {
        let extract = self.parser.extract(xml)?;
        Ok(self.evaluate(extract))
    }

    /// Rate check against the table. The comparison is textual: "18" and
    /// "18.0" diverge, and a missing rate placeholder diverges from every
    /// mapped rate.
    pub fn evaluate(&self, extract: InvoiceExtract) -> ValidationResult {
        let InvoiceExtract {
            product_name,
            cfop_code,
            declared_icms_rate,
        } = extract;

        let expected_icms_rate = self.rates.expected_rate(&cfop_code).map(str::to_string);
        let verdict = match expected_icms_rate.as_deref() {
            None => Verdict::Unmapped {
                cfop: cfop_code.clone(),
            },
            Some(expected) if expected == declared_icms_rate => Verdict::Correct {
                rate: declared_icms_rate.clone(),
            },
            Some(expected) => Verdict::Divergence {
                expected: expected.to_string(),
                declared: declared_icms_rate.clone(),
            },
        };

        ValidationResult {
            product_name,
            cfop_code,
            declared_icms_rate,
            expected_icms_rate,
            verdict,
        }
    }
}
