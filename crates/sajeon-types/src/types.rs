use serde::{Deserialize, Serialize};

/// Language pair served by the auto-complete endpoint.
///
/// The wire code doubles as the subdomain segment of the request URL and as
/// the dictionary tag the service echoes back in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DictType {
    Hanja,
    Korean,
    English,
    Japanese,
    Chinese,
    German,
    French,
    Spanish,
    Russian,
    Vietnamese,
    Italian,
    Thai,
    Indonesian,
    Uzbek,
}

impl DictType {
    /// Wire-protocol code (`ccko`, `koko`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            DictType::Hanja => "ccko",
            DictType::Korean => "koko",
            DictType::English => "enko",
            DictType::Japanese => "jako",
            DictType::Chinese => "zhko",
            DictType::German => "deko",
            DictType::French => "frko",
            DictType::Spanish => "esko",
            DictType::Russian => "ruko",
            DictType::Vietnamese => "viko",
            DictType::Italian => "itko",
            DictType::Thai => "thko",
            DictType::Indonesian => "idko",
            DictType::Uzbek => "uzko",
        }
    }

    /// Referer URL sent along with requests for this dictionary.
    ///
    /// Only hanja, Korean and English have dedicated subdomains; every other
    /// pair uses the generic dictionary portal.
    pub fn referer(&self) -> &'static str {
        match self {
            DictType::Hanja => "https://hanja.dict.naver.com/",
            DictType::Korean => "https://ko.dict.naver.com/",
            DictType::English => "https://en.dict.naver.com/",
            _ => "https://dict.naver.com/",
        }
    }

    /// Resolve a wire code back to its selector.
    pub fn from_code(code: &str) -> Option<Self> {
        let dict = match code {
            "ccko" => DictType::Hanja,
            "koko" => DictType::Korean,
            "enko" => DictType::English,
            "jako" => DictType::Japanese,
            "zhko" => DictType::Chinese,
            "deko" => DictType::German,
            "frko" => DictType::French,
            "esko" => DictType::Spanish,
            "ruko" => DictType::Russian,
            "viko" => DictType::Vietnamese,
            "itko" => DictType::Italian,
            "thko" => DictType::Thai,
            "idko" => DictType::Indonesian,
            "uzko" => DictType::Uzbek,
            _ => return None,
        };
        Some(dict)
    }

    /// Every selector, in declaration order.
    pub fn all() -> [DictType; 14] {
        [
            DictType::Hanja,
            DictType::Korean,
            DictType::English,
            DictType::Japanese,
            DictType::Chinese,
            DictType::German,
            DictType::French,
            DictType::Spanish,
            DictType::Russian,
            DictType::Vietnamese,
            DictType::Italian,
            DictType::Thai,
            DictType::Indonesian,
            DictType::Uzbek,
        ]
    }
}

/// How much of the auto-complete index a lookup consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    Simple,
    Detailed,
}

impl SearchMode {
    /// `(st, r_lt)` wire codes for this mode.
    pub fn codes(&self) -> (&'static str, &'static str) {
        match self {
            SearchMode::Simple => ("11", "10"),
            SearchMode::Detailed => ("111", "111"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Simple => "simple",
            SearchMode::Detailed => "detailed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simple" => Some(SearchMode::Simple),
            "detailed" => Some(SearchMode::Detailed),
            _ => None,
        }
    }
}
