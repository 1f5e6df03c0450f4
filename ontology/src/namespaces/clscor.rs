//! CLSCor entity namespace.
//!
//! Minted entity URIs live directly under [`NS`]; controlled-vocabulary
//! terms live under `NS/type/<vocabulary>/`.

terms! {
    "https://clscor.io/entity/";
    TEI_FORMAT = "type/format/tei",
    ARTIFICIAL_TITLE = "type/appellation/artificial_title",
    TOKEN_FEATURE = "type/feature/token",
}
