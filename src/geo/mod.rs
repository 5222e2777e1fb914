//! Geography lookup for continent classification
//!
//! A static, versioned-independently-of-trip-data mapping from country names
//! in the source locale (Spanish) to a coarse continent grouping and to the
//! English name used by the world-map overlay.
//!
//! Classification is a pure lookup: deterministic, side-effect-free, and
//! total over the table. Unmapped names classify as `None` ("unclassified"),
//! which callers drop silently — it is never an error.
//!
//! # Example
//!
//! ```rust
//! use triplog::geo::{classify, english_name, Continent};
//!
//! assert_eq!(classify("España"), Some(Continent::Europe));
//! assert_eq!(english_name("España"), Some("Spain"));
//! assert_eq!(classify("Atlántida"), None);
//! ```

mod table;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use table::COUNTRY_TABLE;

/// Coarse geographic grouping used by the continent charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    /// África
    Africa,
    /// América del Norte
    NorthAmerica,
    /// América del Sur
    SouthAmerica,
    /// Antártida
    Antarctica,
    /// Asia
    Asia,
    /// Europa
    Europe,
    /// Oceanía
    Oceania,
}

impl Continent {
    /// All continents in chart display order
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Antarctica,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
    ];

    /// Display name in the source locale
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "África",
            Continent::NorthAmerica => "América del Norte",
            Continent::SouthAmerica => "América del Sur",
            Continent::Antarctica => "Antártida",
            Continent::Asia => "Asia",
            Continent::Europe => "Europa",
            Continent::Oceania => "Oceanía",
        }
    }

    /// Short code used as a chart axis label
    pub fn code(&self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::NorthAmerica => "NA",
            Continent::SouthAmerica => "SA",
            Continent::Antarctica => "AN",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::Oceania => "OC",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

lazy_static! {
    static ref BY_SPANISH_NAME: HashMap<&'static str, (Continent, &'static str)> = {
        let mut map = HashMap::with_capacity(COUNTRY_TABLE.len());
        for &(spanish, english, continent) in COUNTRY_TABLE {
            map.insert(spanish, (continent, english));
        }
        map
    };
}

/// Classify a country name into its continent
///
/// Returns `None` for names outside the table. Lookup is exact on the
/// source-locale spelling; the record schema owns normalization.
pub fn classify(country_name: &str) -> Option<Continent> {
    BY_SPANISH_NAME.get(country_name).map(|&(continent, _)| continent)
}

/// English name for a source-locale country name
///
/// The world-map overlay identifies countries by English name; everything
/// else in the store speaks the source locale.
pub fn english_name(country_name: &str) -> Option<&'static str> {
    BY_SPANISH_NAME.get(country_name).map(|&(_, english)| english)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_countries() {
        assert_eq!(classify("España"), Some(Continent::Europe));
        assert_eq!(classify("Japón"), Some(Continent::Asia));
        assert_eq!(classify("Marruecos"), Some(Continent::Africa));
        assert_eq!(classify("Estados Unidos"), Some(Continent::NorthAmerica));
        assert_eq!(classify("Argentina"), Some(Continent::SouthAmerica));
        assert_eq!(classify("Nueva Zelanda"), Some(Continent::Oceania));
        assert_eq!(classify("Antártida"), Some(Continent::Antarctica));
    }

    #[test]
    fn test_unmapped_name_is_unclassified() {
        assert_eq!(classify("Atlántida"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_is_exact_on_spelling() {
        // The table speaks the source locale; unaccented variants miss.
        assert_eq!(classify("Espana"), None);
        assert_eq!(classify("españa"), None);
    }

    #[test]
    fn test_english_names() {
        assert_eq!(english_name("España"), Some("Spain"));
        assert_eq!(english_name("Alemania"), Some("Germany"));
        assert_eq!(english_name("Costa de Marfil"), Some("Ivory Coast"));
        assert_eq!(english_name("Atlántida"), None);
    }

    #[test]
    fn test_table_has_no_duplicate_entries() {
        assert_eq!(BY_SPANISH_NAME.len(), table::COUNTRY_TABLE.len());
    }
}
