//! Simulated mandi (commodity market) rates.
//!
//! Prices are static per-quintal bases with a random daily fluctuation.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

pub const DEFAULT_STATE: &str = "Madhya Pradesh";

#[derive(Debug, Clone, Copy)]
pub struct Commodity {
    pub name: &'static str,
    pub market: &'static str,
    pub base_price: i64,
}

const fn commodity(name: &'static str, market: &'static str, base_price: i64) -> Commodity {
    Commodity {
        name,
        market,
        base_price,
    }
}

const MADHYA_PRADESH: &[Commodity] = &[
    commodity("Wheat (Sharbati)", "Sehore Mandi", 3200),
    commodity("Soybean", "Ujjain Mandi", 4100),
    commodity("Gram (Chana)", "Vidisha Mandi", 5400),
    commodity("Garlic", "Mandsaur Mandi", 9000),
    commodity("Maize", "Chhindwara Mandi", 2100),
];

const MAHARASHTRA: &[Commodity] = &[
    commodity("Onion", "Lasalgaon Mandi", 1800),
    commodity("Cotton", "Akola Mandi", 7200),
    commodity("Sugarcane", "Kolhapur Mandi", 2900),
    commodity("Pomegranate", "Solapur Mandi", 8500),
];

const PUNJAB: &[Commodity] = &[
    commodity("Rice (Basmati)", "Amritsar Mandi", 4500),
    commodity("Wheat", "Ludhiana Mandi", 2275),
    commodity("Mustard", "Bhatinda Mandi", 5100),
];

const UTTAR_PRADESH: &[Commodity] = &[
    commodity("Potato", "Agra Mandi", 950),
    commodity("Sugarcane", "Meerut Mandi", 3100),
    commodity("Mango (Dasheri)", "Lucknow Mandi", 5500),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    fn from_fluctuation(fluctuation: i64) -> Self {
        if fluctuation > 50 {
            Self::Up
        } else if fluctuation < -50 {
            Self::Down
        } else {
            Self::Stable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MandiQuote {
    pub commodity: String,
    pub market: String,
    pub price: i64,
    pub min_price: i64,
    pub max_price: i64,
    pub trend: Trend,
    pub date: String,
}

/// Commodities for `state`, falling back to [`DEFAULT_STATE`] when unknown.
pub fn commodities(state: &str) -> &'static [Commodity] {
    match state {
        "Madhya Pradesh" => MADHYA_PRADESH,
        "Maharashtra" => MAHARASHTRA,
        "Punjab" => PUNJAB,
        "Uttar Pradesh" => UTTAR_PRADESH,
        _ => MADHYA_PRADESH,
    }
}

pub fn quotes<R: Rng + ?Sized>(state: &str, date: NaiveDate, rng: &mut R) -> Vec<MandiQuote> {
    let date = date.format("%d %b %Y").to_string();

    commodities(state)
        .iter()
        .map(|item| {
            let fluctuation = rng.gen_range(-150..=150);
            let price = item.base_price + fluctuation;

            MandiQuote {
                commodity: item.name.to_string(),
                market: item.market.to_string(),
                price,
                min_price: price - rng.gen_range(100..=300),
                max_price: price + rng.gen_range(100..=300),
                trend: Trend::from_fluctuation(fluctuation),
                date: date.clone(),
            }
        })
        .collect()
}
