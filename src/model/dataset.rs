//! The two Data Hub dataset kinds and their fixed category vocabularies.

use std::fmt;

/// Gas categories retained from the monthly consumption endpoint.
pub const GAS_CATEGORIES: [&str; 6] = [
    "CLIENTES_AP",
    "CONSUMO_TOTAL",
    "MERCADO_CONVENCIONAL",
    "MERCADO_ELETRICO",
    "REDE_DISTRIBUICAO",
    "UAG",
];

/// Gas columns in output order. The per-segment columns come first and
/// CONSUMO_TOTAL closes the row.
pub const GAS_COLUMN_ORDER: [&str; 6] = [
    "CLIENTES_AP",
    "MERCADO_CONVENCIONAL",
    "MERCADO_ELETRICO",
    "REDE_DISTRIBUICAO",
    "UAG",
    "CONSUMO_TOTAL",
];

/// Electricity categories retained from the monthly consumption and
/// production endpoint. This list doubles as the output column order.
pub const ELECTRICITY_CATEGORIES: [&str; 26] = [
    "CONSUMO_ARMAZENAMENTO",
    "BIOMASSA_OUTROS",
    "CONSUMO_BOMBAGEM",
    "INJECAO_BATERIAS",
    "CONSUMO_BATERIAS",
    "CONSUMO",
    "BIOMASSA_COGERACAO",
    "EXPORTACAO",
    "HIDRICA",
    "IMPORTACAO",
    "GAS_NATURAL_CICLO_COMBINADO",
    "GAS_NATURAL_COGERACAO",
    "PRODUCAO_NAO_RENOVAVEL",
    "GAS_NATURAL",
    "OUTRA_TERMICA_COGERACAO",
    "OUTRA_TERMICA_OUTROS",
    "OUTRA_TERMICA",
    "PRODUCAO_ARMAZENAMENTO",
    "PRODUCAO_BOMBAGEM",
    "EOLICA",
    "ONDAS",
    "SOLAR",
    "PRODUCAO_TOTAL",
    "PRODUCAO_RENOVAVEL",
    "SALDO_IMPORTADOR",
    "BIOMASSA",
];

/// A dataset published by the Data Hub. Selects the endpoint to fetch from,
/// the category allow-list, and the shape of the exported CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Gas,
    Electricity,
}

impl Dataset {
    /// Categories that survive filtering. Everything else the endpoint
    /// returns is dropped.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Dataset::Gas => &GAS_CATEGORIES,
            Dataset::Electricity => &ELECTRICITY_CATEGORIES,
        }
    }

    /// Category columns in the order they appear in the CSV, after the
    /// leading `ano` and `mes` columns.
    pub fn column_order(&self) -> &'static [&'static str] {
        match self {
            Dataset::Gas => &GAS_COLUMN_ORDER,
            Dataset::Electricity => &ELECTRICITY_CATEGORIES,
        }
    }

    pub fn is_allowed(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    /// Path of the monthly statistics endpoint, relative to the API base URL.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Dataset::Gas => "/gas/GasConsumptionSupplyMonthly",
            Dataset::Electricity => "/electricity/ElectricityConsumptionSupplyMonthly",
        }
    }

    /// File name of the CSV exported for this dataset over a year range.
    pub fn output_filename(&self, start_year: i32, end_year: i32) -> String {
        format!("{}_consumption_{}_{}_REN.csv", self, start_year, end_year)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dataset::Gas => write!(f, "gas"),
            Dataset::Electricity => write!(f, "electricity"),
        }
    }
}
