//! AWS region codes

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// Variant and code are written once here; the enum, `ALL`, `as_str` and
// the reverse lookup are all generated from this list.
macro_rules! region_table {
    ($($variant:ident => $code:literal,)+) => {
        /// AWS region, identified by its short code (e.g. `us-east-1`)
        ///
        /// Codes that are not in the table are kept verbatim in
        /// [`Region::Other`], so parsing a region never fails.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum Region {
            $($variant,)+
            Other(String),
        }

        impl Region {
            /// Every region in the table, in table order
            pub const ALL: &'static [Region] = &[$(Region::$variant,)+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Other(code) => code,
                }
            }
        }

        impl From<&str> for Region {
            fn from(code: &str) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }
    };
}

region_table! {
    UsEast1 => "us-east-1",
    UsEast2 => "us-east-2",
    UsWest1 => "us-west-1",
    UsWest2 => "us-west-2",
    AfSouth1 => "af-south-1",
    ApEast1 => "ap-east-1",
    ApSouth1 => "ap-south-1",
    ApSouth2 => "ap-south-2",
    ApNortheast1 => "ap-northeast-1",
    ApNortheast2 => "ap-northeast-2",
    ApNortheast3 => "ap-northeast-3",
    ApSoutheast1 => "ap-southeast-1",
    ApSoutheast2 => "ap-southeast-2",
    ApSoutheast3 => "ap-southeast-3",
    ApSoutheast4 => "ap-southeast-4",
    CaCentral1 => "ca-central-1",
    CaWest1 => "ca-west-1",
    EuCentral1 => "eu-central-1",
    EuCentral2 => "eu-central-2",
    EuNorth1 => "eu-north-1",
    EuSouth1 => "eu-south-1",
    EuSouth2 => "eu-south-2",
    EuWest1 => "eu-west-1",
    EuWest2 => "eu-west-2",
    EuWest3 => "eu-west-3",
    IlCentral1 => "il-central-1",
    MeCentral1 => "me-central-1",
    MeSouth1 => "me-south-1",
    SaEast1 => "sa-east-1",
}

impl Region {
    /// Whether the code appears in the region table
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::UsEast1
    }
}

impl From<String> for Region {
    fn from(code: String) -> Self {
        Region::from(code.as_str())
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Region {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Region::from(s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
