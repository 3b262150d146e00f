//! Serde model of the ECB `eurofxref-daily.xml` document.
//!
//! ```xml
//! <gesmes:Envelope ...>
//!     <gesmes:subject>Reference rates</gesmes:subject>
//!     <Cube>
//!         <Cube time="2024-05-17">
//!             <Cube currency="USD" rate="1.0867"/>
//!             ...
//! ```
//!
//! Every level is called `Cube`, only the nesting tells them apart.

use serde::Deserialize;

use crate::error::ParseError;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Envelope {
    #[serde(rename = "Cube")]
    pub cube: RootCube,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RootCube {
    #[serde(rename = "Cube")]
    pub daily: DailyCube,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct DailyCube {
    #[serde(rename = "@time")]
    pub time: String,
    #[serde(rename = "Cube")]
    pub rates: Vec<RateCube>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RateCube {
    #[serde(rename = "@currency")]
    pub currency: String,
    #[serde(rename = "@rate")]
    pub rate: String,
}

impl Envelope {
    pub fn from_xml(text: &str) -> Result<Self, ParseError> {
        Ok(quick_xml::de::from_str(text)?)
    }
}
