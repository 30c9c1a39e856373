use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Serialize};
use thiserror::Error;

/// The german states, which decide which public holidays apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum State {
    /// Baden-Württemberg
    BW,
    /// Bayern
    BY,
    /// Berlin
    BE,
    /// Brandenburg
    BB,
    /// Bremen
    HB,
    /// Hamburg
    HH,
    /// Hessen
    HE,
    /// Mecklenburg-Vorpommern
    MV,
    /// Niedersachsen
    NI,
    /// Nordrhein-Westfalen
    NW,
    /// Rheinland-Pfalz
    RP,
    /// Saarland
    SL,
    /// Sachsen
    SN,
    /// Sachsen-Anhalt
    ST,
    /// Schleswig-Holstein
    SH,
    /// Thüringen
    TH,
}

impl State {
    pub const fn states() -> [Self; 16] {
        [
            Self::BW,
            Self::BY,
            Self::BE,
            Self::BB,
            Self::HB,
            Self::HH,
            Self::HE,
            Self::MV,
            Self::NI,
            Self::NW,
            Self::RP,
            Self::SL,
            Self::SN,
            Self::ST,
            Self::SH,
            Self::TH,
        ]
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BW => "BW",
            Self::BY => "BY",
            Self::BE => "BE",
            Self::BB => "BB",
            Self::HB => "HB",
            Self::HH => "HH",
            Self::HE => "HE",
            Self::MV => "MV",
            Self::NI => "NI",
            Self::NW => "NW",
            Self::RP => "RP",
            Self::SL => "SL",
            Self::SN => "SN",
            Self::ST => "ST",
            Self::SH => "SH",
            Self::TH => "TH",
        }
    }

    #[must_use]
    pub(crate) fn is_one_of(&self, states: &[Self]) -> bool {
        states.contains(self)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown state `{input}`, expected one of: BW, BY, BE, BB, HB, HH, HE, MV, NI, NW, RP, SL, SN, ST, SH, TH")]
pub struct UnknownState {
    input: String,
}

impl FromStr for State {
    type Err = UnknownState;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let code = string.trim().to_uppercase();

        Self::states()
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or_else(|| UnknownState {
                input: string.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}
