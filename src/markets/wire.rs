//! Hand-written decoding for the market records whose JSON does not map field-for-field.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::wire::{flag, lenient_value};
use crate::markets::model::{InvestorTrades, PublishReason, TradeFlow};

/// Flag names of `PublishReason`, in the order of their positions in the raw string.
pub(crate) const PUBLISH_REASON_FLAGS: [&str; 6] = [
    "Restricted",
    "DailyPublication",
    "Monitoring",
    "RestrictedByJSF",
    "PrecautionByJSF",
    "UnclearOrSecOnAlert",
];

#[derive(Deserialize)]
#[serde(untagged)]
enum PublishReasonRepr {
    Raw(String),
    Flags(BTreeMap<String, Value>),
}

impl<'de> Deserialize<'de> for PublishReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match PublishReasonRepr::deserialize(deserializer)? {
            PublishReasonRepr::Raw(s) => Ok(Self::new(s)),
            PublishReasonRepr::Flags(map) => {
                let mut packed = String::with_capacity(PUBLISH_REASON_FLAGS.len());
                for name in PUBLISH_REASON_FLAGS {
                    let set = match map.get(name) {
                        Some(v) => flag(v).map_err(de::Error::custom)?.unwrap_or(false),
                        None => false,
                    };
                    packed.push(if set { '1' } else { '0' });
                }
                Ok(Self::new(packed))
            }
        }
    }
}

/// JSON field prefixes of the investor categories in `/markets/trades_spec`, in field order.
const CATEGORIES: [&str; 13] = [
    "Proprietary",
    "Brokerage",
    "Total",
    "Individuals",
    "Foreigners",
    "SecuritiesCos",
    "InvestmentTrusts",
    "BusinessCos",
    "OtherCos",
    "InsuranceCos",
    "CityBKsRegionalBKsEtc",
    "TrustBanks",
    "OtherFinancialInstitutions",
];

fn text(map: &Map<String, Value>, key: &str) -> Result<String, String> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("`{key}` is not a string: {other}")),
        None => Err(format!("missing field `{key}`")),
    }
}

fn number(map: &Map<String, Value>, key: &str) -> Result<Option<f64>, String> {
    map.get(key).map_or(Ok(None), |v| {
        lenient_value(v).map_err(|e| format!("`{key}`: {e}"))
    })
}

fn flow(map: &Map<String, Value>, prefix: &str) -> Result<TradeFlow, String> {
    Ok(TradeFlow {
        sales: number(map, &format!("{prefix}Sales"))?,
        purchases: number(map, &format!("{prefix}Purchases"))?,
        total: number(map, &format!("{prefix}Total"))?,
        balance: number(map, &format!("{prefix}Balance"))?,
    })
}

impl TryFrom<Map<String, Value>> for InvestorTrades {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut flows = CATEGORIES
            .iter()
            .map(|prefix| flow(&map, prefix))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();
        let mut next = || flows.next().unwrap_or_default();

        Ok(Self {
            published_date: text(&map, "PublishedDate")?,
            start_date: text(&map, "StartDate")?,
            end_date: text(&map, "EndDate")?,
            section: text(&map, "Section")?,
            proprietary: next(),
            brokerage: next(),
            total: next(),
            individuals: next(),
            foreigners: next(),
            securities_cos: next(),
            investment_trusts: next(),
            business_cos: next(),
            other_cos: next(),
            insurance_cos: next(),
            city_banks_regional_banks_etc: next(),
            trust_banks: next(),
            other_financial_institutions: next(),
        })
    }
}

fn put_flow(map: &mut Map<String, Value>, prefix: &str, flow: &TradeFlow) {
    let parts = [
        ("Sales", flow.sales),
        ("Purchases", flow.purchases),
        ("Total", flow.total),
        ("Balance", flow.balance),
    ];
    for (suffix, value) in parts {
        if let Some(v) = value {
            map.insert(format!("{prefix}{suffix}"), Value::from(v));
        }
    }
}

impl From<InvestorTrades> for Map<String, Value> {
    fn from(t: InvestorTrades) -> Self {
        let mut map = Self::new();
        map.insert("PublishedDate".into(), Value::String(t.published_date));
        map.insert("StartDate".into(), Value::String(t.start_date));
        map.insert("EndDate".into(), Value::String(t.end_date));
        map.insert("Section".into(), Value::String(t.section));

        let flows = [
            &t.proprietary,
            &t.brokerage,
            &t.total,
            &t.individuals,
            &t.foreigners,
            &t.securities_cos,
            &t.investment_trusts,
            &t.business_cos,
            &t.other_cos,
            &t.insurance_cos,
            &t.city_banks_regional_banks_etc,
            &t.trust_banks,
            &t.other_financial_institutions,
        ];
        for (prefix, flow) in CATEGORIES.iter().zip(flows) {
            put_flow(&mut map, prefix, flow);
        }
        map
    }
}
