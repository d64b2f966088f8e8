use libxml::{parser::Parser, tree::Document, xpath};

use crate::domain::{ports::InvoiceParser, DomainError, InvoiceExtract};
use crate::infrastructure::nfe::constants::{CFOP_PATH, NFE_NS, PICMS_PATH, XPROD_PATH};

/// Reads product name, CFOP and declared ICMS rate from an NF-e document.
///
/// Each lookup takes the first matching element in document order; on a
/// multi-item invoice only the first item's fields are read. A lookup with
/// no match degrades to the placeholder value inside `InvoiceExtract`.
#[derive(Default)]
pub struct XmlInvoiceParser;

impl XmlInvoiceParser {
    pub fn new() -> Self {
        Self
    }
}

impl InvoiceParser for XmlInvoiceParser {
    fn extract(&self, xml: &str) -> Result<InvoiceExtract, DomainError> {
        let doc = Parser::default()
            .parse_string(xml)
            .map_err(|e| DomainError::parse(format!("{e:?}")))?;
        let ctx = build_context(&doc)?;

        let product_name = xpath_text_first(&ctx, XPROD_PATH)?;
        let cfop_code = xpath_text_first(&ctx, CFOP_PATH)?;
        let declared_icms_rate = xpath_text_first(&ctx, PICMS_PATH)?;

        Ok(InvoiceExtract::new(
            product_name,
            cfop_code,
            declared_icms_rate,
        ))
    }
}

fn build_context(doc: &Document) -> Result<xpath::Context, DomainError> {
    let ctx = xpath::Context::new(doc).map_err(|e| DomainError::parse(format!("{e:?}")))?;
    ctx.register_namespace("nfe", NFE_NS)
        .map_err(|e| DomainError::parse(format!("{e:?}")))?;
    Ok(ctx)
}

fn xpath_text_first(ctx: &xpath::Context, expr: &str) -> Result<Option<String>, DomainError> {
    let nodes = ctx
        .evaluate(expr)
        .map_err(|e| DomainError::parse(format!("{e:?}")))?
        .get_nodes_as_vec();
    let node = match nodes.first() {
        Some(node) => node,
        None => return Ok(None),
    };
    let value = node.get_content().trim().to_string();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(value))
}
