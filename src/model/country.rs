use serde::Deserialize;
use std::collections::BTreeMap;

/// One record of a `/v3.1/name/{name}` response. Only consumed fields are mapped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub flags: FlagUrls,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlagUrls {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    pub symbol: Option<String>,
}

/// Detail attributes shown for a single country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub name: String,
    pub capital: Option<String>,
    pub continent: String,
    pub population: u64,
    pub currency: Option<String>,
}

impl CountryDetail {
    pub fn from_record(name: &str, record: CountryRecord) -> Self {
        // BTreeMap ordering makes the "first" currency the lowest currency code.
        let currency = record
            .currencies
            .into_values()
            .map(|currency| currency.name)
            .find(|name| !name.trim().is_empty());

        Self {
            name: name.to_string(),
            capital: record.capital.into_iter().next(),
            continent: record.region,
            population: record.population,
            currency,
        }
    }
}
