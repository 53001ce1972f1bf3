use crate::model::CountryDetail;

pub const UNKNOWN_CURRENCY: &str = "Unknown currency";
pub const NO_CAPITAL: &str = "No capital";
pub const UNKNOWN_REGION: &str = "Unknown";

const MAX_NAME_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

pub fn detail_rows(detail: &CountryDetail) -> Vec<DetailRow> {
    vec![
        DetailRow::new(
            "Capital",
            detail.capital.as_deref().unwrap_or(NO_CAPITAL),
        ),
        DetailRow::new("Continent", display_region(&detail.continent)),
        DetailRow::new("Population", detail.population.to_string()),
        DetailRow::new(
            "Currency",
            detail.currency.as_deref().unwrap_or(UNKNOWN_CURRENCY),
        ),
    ]
}

fn display_region(region: &str) -> &str {
    let region = region.trim();
    if region.is_empty() {
        UNKNOWN_REGION
    } else {
        region
    }
}

/// Shortens long country names so cards keep a uniform height.
pub fn card_title(name: &str) -> String {
    if name.chars().count() > MAX_NAME_LEN {
        let mut truncated = name.chars().take(MAX_NAME_LEN - 1).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_for(detail: &CountryDetail) -> Vec<(&'static str, String)> {
        detail_rows(detail)
            .into_iter()
            .map(|row| (row.label, row.value))
            .collect()
    }

    #[test]
    fn france_rows() {
        let detail = CountryDetail {
            name: "France".to_string(),
            capital: Some("Paris".to_string()),
            continent: "Europe".to_string(),
            population: 67_000_000,
            currency: Some("Euro".to_string()),
        };

        assert_eq!(
            rows_for(&detail),
            vec![
                ("Capital", "Paris".to_string()),
                ("Continent", "Europe".to_string()),
                ("Population", "67000000".to_string()),
                ("Currency", "Euro".to_string()),
            ]
        );
    }

    #[test]
    fn missing_values_use_placeholders() {
        let detail = CountryDetail {
            name: "Antarctica".to_string(),
            capital: None,
            continent: " ".to_string(),
            population: 1000,
            currency: None,
        };

        let rows = rows_for(&detail);
        assert_eq!(rows[0].1, NO_CAPITAL);
        assert_eq!(rows[1].1, UNKNOWN_REGION);
        assert_eq!(rows[3].1, UNKNOWN_CURRENCY);
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(card_title("Peru"), "Peru");
        let long = "South Georgia and the South Sandwich Islands";
        let title = card_title(long);
        assert_eq!(title.chars().count(), MAX_NAME_LEN);
        assert!(title.ends_with('…'));
    }
}
