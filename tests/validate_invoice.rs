use std::path::Path;
use std::sync::Arc;

use contai::application::InvoiceService;
use contai::domain::{DomainError, RateTable, Verdict, FIELD_NOT_FOUND};
use contai::infrastructure::XmlInvoiceParser;

fn service() -> InvoiceService {
    InvoiceService::new(Arc::new(XmlInvoiceParser::new()), RateTable::default())
}

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/nfe")
        .join(name);
    std::fs::read_to_string(path).expect("read fixture")
}

#[test]
fn mapped_cfop_with_matching_rate_is_correct() {
    let result = service()
        .validate(&fixture("icms-correct.xml"))
        .expect("validate");

    assert_eq!(result.product_name, "Notebook Dell Inspiron 15");
    assert_eq!(result.cfop_code, "5101");
    assert_eq!(result.declared_icms_rate, "18");
    assert_eq!(result.expected_icms_rate.as_deref(), Some("18"));
    assert_eq!(result.verdict, Verdict::Correct { rate: "18".into() });
    assert_eq!(result.verdict.to_string(), "ICMS correto (18%).");
}

#[test]
fn mapped_cfop_with_different_rate_diverges() {
    let result = service()
        .validate(&fixture("icms-divergent.xml"))
        .expect("validate");

    assert_eq!(result.cfop_code, "6102");
    assert_eq!(
        result.verdict.to_string(),
        "Divergência: esperado 12%, encontrado 18%."
    );
}

#[test]
fn unknown_cfop_is_reported_unmapped() {
    let result = service()
        .validate(&fixture("cfop-unmapped.xml"))
        .expect("validate");

    assert_eq!(result.expected_icms_rate, None);
    assert_eq!(result.verdict.to_string(), "CFOP 9999 não mapeado.");
}

// "18.00" on the wire is not "18" in the table: the comparison is textual.
#[test]
fn decimal_spelling_of_a_matching_rate_diverges() {
    let result = service()
        .validate(&fixture("rate-decimal.xml"))
        .expect("validate");

    assert_eq!(result.declared_icms_rate, "18.00");
    assert_eq!(
        result.verdict,
        Verdict::Divergence {
            expected: "18".into(),
            declared: "18.00".into(),
        }
    );
}

#[test]
fn missing_picms_degrades_to_placeholder_and_diverges() {
    let result = service()
        .validate(&fixture("missing-picms.xml"))
        .expect("validate");

    assert_eq!(result.declared_icms_rate, FIELD_NOT_FOUND);
    assert_eq!(result.cfop_code, "5102");
    assert_eq!(
        result.verdict,
        Verdict::Divergence {
            expected: "18".into(),
            declared: FIELD_NOT_FOUND.into(),
        }
    );
}

#[test]
fn only_the_first_item_of_a_multi_item_invoice_is_read() {
    let result = service()
        .validate(&fixture("multi-item.xml"))
        .expect("validate");

    assert_eq!(result.product_name, "Monitor LED 24 polegadas");
    assert_eq!(result.cfop_code, "5101");
    assert_eq!(result.declared_icms_rate, "18");
    assert_eq!(result.verdict, Verdict::Correct { rate: "18".into() });
}

#[test]
fn malformed_xml_is_a_parse_error_not_a_partial_result() {
    let err = service().validate("<NFe><infNFe>").unwrap_err();
    assert!(matches!(err, DomainError::Parse(_)));

    let err = service().validate("isto não é XML").unwrap_err();
    assert!(matches!(err, DomainError::Parse(_)));
}

#[test]
fn document_without_any_known_field_keeps_all_placeholders() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<nfeProc xmlns="http://www.portalfiscal.inf.br/nfe" versao="4.00">
  <NFe>
    <infNFe Id="NFe000" versao="4.00">
      <ide><mod>55</mod></ide>
    </infNFe>
  </NFe>
</nfeProc>
"#;

    let result = service().validate(xml).expect("validate");

    assert_eq!(result.product_name, FIELD_NOT_FOUND);
    assert_eq!(result.cfop_code, FIELD_NOT_FOUND);
    assert_eq!(result.declared_icms_rate, FIELD_NOT_FOUND);
    assert_eq!(
        result.verdict,
        Verdict::Unmapped {
            cfop: FIELD_NOT_FOUND.into()
        }
    );
}
