/// Static descriptor for one supported country.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Country {
    /// Short lowercase selector, e.g. `"uk"`.
    pub code: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// API request path segment sent in the POST payload.
    pub path: &'static str,
}

/// Country used when no `--country` argument is given.
pub const DEFAULT_COUNTRY: &str = "uk";

/// All supported countries, in declaration order.
///
/// The US endpoint lives at the API root; every other country has a
/// `/<code>-address` path.
pub const COUNTRIES: &[Country] = &[
    Country { code: "us", name: "United States", path: "/" },
    Country { code: "uk", name: "United Kingdom", path: "/uk-address" },
    Country { code: "ca", name: "Canada", path: "/ca-address" },
    Country { code: "au", name: "Australia", path: "/au-address" },
    Country { code: "jp", name: "Japan", path: "/jp-address" },
    Country { code: "tw", name: "Taiwan", path: "/tw-address" },
    Country { code: "kr", name: "South Korea", path: "/kr-address" },
    Country { code: "hk", name: "Hong Kong", path: "/hk-address" },
    Country { code: "de", name: "Germany", path: "/de-address" },
    Country { code: "sg", name: "Singapore", path: "/sg-address" },
    Country { code: "fr", name: "France", path: "/fr-address" },
    Country { code: "it", name: "Italy", path: "/it-address" },
    Country { code: "es", name: "Spain", path: "/es-address" },
    Country { code: "nl", name: "Netherlands", path: "/nl-address" },
    Country { code: "my", name: "Malaysia", path: "/my-address" },
    Country { code: "ru", name: "Russia", path: "/ru-address" },
    Country { code: "cn", name: "China", path: "/cn-address" },
    Country { code: "th", name: "Thailand", path: "/th-address" },
    Country { code: "ph", name: "Philippines", path: "/ph-address" },
    Country { code: "ar", name: "Argentina", path: "/ar-address" },
    Country { code: "tr", name: "Turkey", path: "/tr-address" },
    Country { code: "vn", name: "Vietnam", path: "/vn-address" },
];

/// Looks up a country by code, case-insensitively.
pub fn lookup(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code))
}
