pub(crate) const NFE_NS: &str = "http://www.portalfiscal.inf.br/nfe";

pub(crate) const XPROD_PATH: &str = "//nfe:prod/nfe:xProd";
pub(crate) const CFOP_PATH: &str = "//nfe:prod/nfe:CFOP";
pub(crate) const PICMS_PATH: &str = "//nfe:ICMS//nfe:pICMS";
