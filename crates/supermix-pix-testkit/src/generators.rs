//! Proptest generators for property-based testing.

use proptest::prelude::*;

use supermix_pix::PixSettings;

/// Email-shaped key. Letters only in the local part, so the digit rule
/// never fires.
pub fn email_key() -> impl Strategy<Value = String> {
    "[a-z][a-z._]{0,20}@[a-z]{2,10}\\.com(\\.br)?".prop_map(String::from)
}

#[derive(Debug, Clone, Copy)]
enum PhoneStyle {
    Plain,
    Prefixed,
    Punctuated,
}

/// Phone key, with or without the `+55` prefix and punctuation.
pub fn phone_key() -> impl Strategy<Value = String> {
    (
        "[1-9][1-9]",
        "9?[2-9][0-9]{7}",
        prop_oneof![
            Just(PhoneStyle::Plain),
            Just(PhoneStyle::Prefixed),
            Just(PhoneStyle::Punctuated),
        ],
    )
        .prop_map(|(area, number, style)| match style {
            PhoneStyle::Plain => format!("{area}{number}"),
            PhoneStyle::Prefixed => format!("+55{area}{number}"),
            PhoneStyle::Punctuated => format!("({area}) {number}"),
        })
}

/// CPF (11 digits) or CNPJ (14 digits), bare or punctuated.
pub fn tax_id_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{11}",
        "[0-9]{3}\\.[0-9]{3}\\.[0-9]{3}-[0-9]{2}",
        "[0-9]{14}",
        "[0-9]{2}\\.[0-9]{3}\\.[0-9]{3}/[0-9]{4}-[0-9]{2}",
    ]
}

/// EVP random key in UUID layout.
pub fn random_key() -> impl Strategy<Value = String> {
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}".prop_map(String::from)
}

/// Any realistic PIX key.
pub fn pix_key() -> impl Strategy<Value = String> {
    prop_oneof![email_key(), phone_key(), tax_id_key(), random_key()]
}

/// Portuguese-looking text with accents, punctuation and stray spaces.
pub fn payee_text() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-zÀ-ÿçÇãõÃÕ0-9 &./-]{0,40}[ ]{0,2}".prop_map(String::from)
}

/// Amount in reais with whole centavos.
pub fn amount() -> impl Strategy<Value = f64> {
    (0u64..=100_000_000).prop_map(|cents| cents as f64 / 100.0)
}

/// Parameters for one payload.
#[derive(Debug, Clone)]
pub struct PayloadParams {
    pub key: String,
    pub name: String,
    pub city: String,
    pub amount: f64,
}

impl PayloadParams {
    pub fn settings(&self) -> PixSettings {
        PixSettings::new(self.key.clone(), self.name.clone(), self.city.clone())
    }
}

impl Arbitrary for PayloadParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (pix_key(), payee_text(), payee_text(), amount())
            .prop_map(|(key, name, city, amount)| PayloadParams {
                key,
                name,
                city,
                amount,
            })
            .boxed()
    }
}
