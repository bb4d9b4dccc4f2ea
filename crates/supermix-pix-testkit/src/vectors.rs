//! Golden payload vectors.
//!
//! Each vector pins the exact string a given input must produce, CRC
//! included.

use serde::Serialize;
use supermix_pix_core::build_pix_payload;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Short identifier.
    pub name: &'static str,
    /// What the vector exercises.
    pub description: &'static str,
    pub key: &'static str,
    pub payee_name: &'static str,
    pub payee_city: &'static str,
    pub amount: f64,
    /// Expected payload, CRC included.
    pub expected_payload: &'static str,
}

impl GoldenVector {
    /// Build the payload for this vector's inputs.
    pub fn build(&self) -> String {
        build_pix_payload(self.key, self.payee_name, self.payee_city, self.amount)
    }

    /// The expected trailing CRC.
    pub fn expected_crc(&self) -> &'static str {
        &self.expected_payload[self.expected_payload.len() - 4..]
    }
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "email_key",
            description: "Plain email key, already-normalized name and city",
            key: "pix@example.com",
            payee_name: "ACME CONCRETO",
            payee_city: "SAO PAULO",
            amount: 100.0,
            expected_payload: "00020101021226370014BR.GOV.BCB.PIX0115pix@example.com\
                               5204000053039865406100.005802BR5913ACME CONCRETO\
                               6009SAO PAULO62200516SUPERMIXCONCRETO63045282",
        },
        GoldenVector {
            name: "bare_mobile_with_diacritics",
            description: "11-digit phone gets +55; name and city lose accents and are truncated",
            key: "11987654321",
            payee_name: "João da Silva Concreto Usinado",
            payee_city: "São José dos Campos",
            amount: 1234.5,
            expected_payload: "00020101021226360014BR.GOV.BCB.PIX0114+5511987654321\
                               52040000530398654071234.505802BR5925JOAO DA SILVA CONCRETO US\
                               6015SAO JOSE DOS CA62200516SUPERMIXCONCRETO63048C77",
        },
        GoldenVector {
            name: "empty_name_city_zero_amount",
            description: "Degenerate but valid: zero-length name and city, amount 0.00",
            key: "pix@example.com",
            payee_name: "",
            payee_city: "",
            amount: 0.0,
            expected_payload: "00020101021226370014BR.GOV.BCB.PIX0115pix@example.com\
                               52040000530398654040.005802BR5900600062200516SUPERMIXCONCRETO\
                               630411A9",
        },
        GoldenVector {
            name: "random_key_midpoint_amount",
            description: "EVP key untouched; 0.125 is exact in binary and rounds up",
            key: "123e4567-e12b-12d1-a456-426655440000",
            payee_name: "Supermix Concreto S/A",
            payee_city: "Belo Horizonte",
            amount: 0.125,
            expected_payload: "00020101021226580014BR.GOV.BCB.PIX0136123e4567-e12b-12d1-a456-426655440000\
                               52040000530398654040.135802BR5920SUPERMIX CONCRETO SA\
                               6014BELO HORIZONTE62200516SUPERMIXCONCRETO6304B0DD",
        },
        GoldenVector {
            name: "prefixed_phone_binary_rounding",
            description: "+55 key untouched; 1.005 is below the midpoint in binary",
            key: "+5511987654321",
            payee_name: "Concreteira Ação",
            payee_city: "Goiânia",
            amount: 1.005,
            expected_payload: "00020101021226360014BR.GOV.BCB.PIX0114+5511987654321\
                               52040000530398654041.005802BR5916CONCRETEIRA ACAO\
                               6007GOIANIA62200516SUPERMIXCONCRETO63041413",
        },
        GoldenVector {
            name: "long_name_exact_budget",
            description: "Name truncated to exactly 25 characters",
            key: "+5562999887766",
            payee_name: "Supermix Concreto Usinado Ltda",
            payee_city: "Goiânia",
            amount: 4350.0,
            expected_payload: "00020101021226360014BR.GOV.BCB.PIX0114+5562999887766\
                               52040000530398654074350.005802BR5925SUPERMIX CONCRETO USINADO\
                               6007GOIANIA62200516SUPERMIXCONCRETO6304E7E1",
        },
        GoldenVector {
            name: "cpf_key_is_prefixed",
            description: "An 11-digit CPF key is indistinguishable from a phone and gets +55",
            key: "12345678900",
            payee_name: "Maria Aparecida",
            payee_city: "Aparecida de Goiânia",
            amount: 89.9,
            expected_payload: "00020101021226360014BR.GOV.BCB.PIX0114+5512345678900\
                               520400005303986540589.905802BR5915MARIA APARECIDA\
                               6015APARECIDA DE GO62200516SUPERMIXCONCRETO6304ACAF",
        },
        GoldenVector {
            name: "cnpj_key_with_symbols",
            description: "Punctuated 14-digit CNPJ untouched; '&' dropped from the name",
            key: "00.000.000/0001-91",
            payee_name: "Concreto & Cia",
            payee_city: "Brasília",
            amount: 15000.0,
            expected_payload: "00020101021226400014BR.GOV.BCB.PIX011800.000.000/0001-91\
                               520400005303986540815000.005802BR5913CONCRETO  CIA\
                               6008BRASILIA62200516SUPERMIXCONCRETO63048E63",
        },
    ]
}

/// Check every vector. Returns `(name, matches, actual)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = v.build();
            (v.name.to_string(), actual == v.expected_payload, actual)
        })
        .collect()
}

/// All vectors as pretty JSON, for sharing with other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}
