use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::eurofxref::Envelope;

/// Currency the ECB quotes everything against. Never listed in the feed itself.
pub const BASE_CURRENCY: &str = "EUR";

/// Rates keyed by ISO 4217 code, relative to [`BASE_CURRENCY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<String, f64>);

impl RateTable {
    pub fn get(&self, currency: &str) -> Option<f64> {
        self.0.get(currency).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    fn insert(&mut self, currency: String, rate: f64) {
        self.0.insert(currency, rate);
    }
}

/// One day's reference rates as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub date: NaiveDate,
    pub rates: RateTable,
}

/// Parses a raw `eurofxref` document into a snapshot. Fails as a whole; no partial tables.
pub fn normalize(text: &str) -> Result<FeedSnapshot, ParseError> {
    let envelope = Envelope::from_xml(text)?;
    let daily = envelope.cube.daily;

    let date = NaiveDate::parse_from_str(daily.time.trim(), "%Y-%m-%d")
        .map_err(|_| ParseError::Date(daily.time.clone()))?;

    if daily.rates.is_empty() {
        return Err(ParseError::NoRates);
    }

    let mut rates = RateTable::default();

    for entry in daily.rates {
        let currency = entry.currency.trim();
        if !is_currency_code(currency) {
            return Err(ParseError::Currency(entry.currency));
        }

        let rate = parse_rate(&entry.rate).ok_or_else(|| ParseError::Rate {
            currency: currency.to_string(),
            rate: entry.rate.clone(),
        })?;

        rates.insert(currency.to_string(), rate);
    }

    rates.insert(BASE_CURRENCY.to_string(), 1.0);

    Ok(FeedSnapshot { date, rates })
}

fn is_currency_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn parse_rate(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite() && *rate > 0.0)
}
