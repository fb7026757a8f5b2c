use std::str::FromStr;

use serde::Deserialize;

/// State of the data the demo validation task inspects.
///
/// - `Fresh`: data is current; validation succeeds on its own.
/// - `Stale`: data is outdated; validation appends a refresh and succeeds.
/// - `Broken`: the data source itself fails; validation fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataState {
    Fresh,
    Stale,
    Broken,
}

impl Default for DataState {
    fn default() -> Self {
        DataState::Fresh
    }
}

impl FromStr for DataState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresh" => Ok(DataState::Fresh),
            "stale" => Ok(DataState::Stale),
            "broken" => Ok(DataState::Broken),
            other => Err(format!(
                "invalid data_state: {other} (expected \"fresh\", \"stale\" or \"broken\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Stale ".parse::<DataState>(), Ok(DataState::Stale));
        assert_eq!("BROKEN".parse::<DataState>(), Ok(DataState::Broken));
        assert!("rotten".parse::<DataState>().is_err());
    }
}
