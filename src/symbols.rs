//! Symbol lookup table
//!
//! A static mapping from external icon identifiers (image file names) to
//! internal symbol codes. The table is built once and injected into the
//! converter; the converter never consults ambient global state. Absence
//! of a key is a policy decision, see
//! [`crate::config::UnknownSymbolPolicy`].

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Code substituted for unmapped icons under the fallback policy
pub const DEFAULT_SYMBOL_CODE: &str = "s0460";

/// Immutable icon-id to symbol-code mapping
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    map: AHashMap<String, String>,
}

static STANDARD: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::from_pairs(STANDARD_SYMBOLS));

impl SymbolTable {
    /// Empty table
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Build a table from (icon id, symbol code) pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        SymbolTable {
            map: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// The built-in mapping shipped with the converter
    pub fn standard() -> &'static SymbolTable {
        &STANDARD
    }

    /// Resolve an icon identifier
    pub fn get(&self, icon_id: &str) -> Option<&str> {
        self.map.get(icon_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The standard icon set of the incident plotting domain
const STANDARD_SYMBOLS: &[(&str, &str)] = &[
    ("GHOR-1.gif", "C01-C"),
    ("GHOR_Ambulancestation-1.gif", "C07"),
    ("GHOR_Behandelcentrum-1.gif", "C04"),
    ("Huisartsenpost-1.gif", "s1020"),
    ("GHOR_loodspost-1.gif", "C02"),
    ("GHOR_mobiele_locatie-1.gif", "C06"),
    ("GHOR_OVD-1.gif", "C01-A"),
    ("GHOR_vaste_locatie-1.gif", "C05"),
    ("GHOR_voertuig-1.gif", "C03"),
    ("Brandweer-1.gif", "B01-C"),
    ("Brandweer_blusboot-1.gif", "B04"),
    ("Brandweer_voertuig-1.gif", "B03"),
    ("Brandweer_Bluswatervoorziening-1.gif", "B06"),
    ("Brandkraan_100mm-1.gif", "B07"),
    ("Brandkraan_150mm-1.gif", "B08"),
    ("Brandkraan_200mm-1.gif", "B09"),
    ("Brandstofvoorziening-1.gif", "B14"),
    ("Brandweer_decontaminatie-1.gif", "B13"),
    ("Brandweer_meetploeg-1.gif", "B05"),
    ("Brandweer_mobiele_locatie-1.gif", "B11"),
    ("Brandweer_ontsmettingssluis-1.gif", "B12"),
    ("Brandweer_OVD-1.gif", "B01-A"),
    ("Brandweer_Uitgangsstelling-1.gif", "s0870_B03"),
    ("Brandweer_vaste_locatie-1.gif", "B10"),
    ("Gemeente-1.gif", "E01-B"),
    ("Beschikbaar_groot_gebouw-1.gif", "s1040"),
    ("Mortuarium-1.gif", "E04"),
    ("Gemeente_opvanglocatie-1.gif", "E02"),
    ("Verzamelplaats_doden-1.gif", "E05"),
    ("Gemeente_voertuig-1.gif", "E03"),
    ("COPI-1.png", "A07"),
    ("Incidentlocatie-1.png", "incidentlocatie"),
    ("Afgesloten_Weg-1.gif", "A05"),
    ("Politie-1.gif", "s0490_D01-B"),
    ("Politie_Detentievoorziening-1.gif", "D05"),
    ("Politie_mobiele_locatie-1.gif", "D03"),
    ("Politie_OVD-1.gif", "D01-A"),
    ("Politie_plaatsdelict-1.gif", "D06"),
    ("Politie_Sporenonderzoek_Technische_recherche-1.gif", "D08"),
    ("Politie_vaste_locatie-1.gif", "D02"),
    ("Verzegeld_pand-1.gif", "A04"),
    ("Politie_voertuig-1.gif", "D04"),
    ("Politie_werkruimte_TR-1.gif", "D07"),
    ("Politie_wegblokade-1.gif", "D01-B"),
    ("Algemeen-1.gif", "s0460"),
    ("Defensie-1.gif", "F02"),
    ("Logistiek_punt-1.gif", "s0730"),
    ("Provincie-1.gif", "F04"),
    ("Materialenpost_RWS-1.gif", "s1050"),
    ("Sirene-1.gif", "A09"),
    ("Spoorwegen-1.gif", "F01"),
    ("Waterschap-1.gif", "F03"),
    ("Ziekenhuis_functionerend-1.gif", "A11"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = SymbolTable::standard();
        assert_eq!(table.len(), STANDARD_SYMBOLS.len());
        assert_eq!(table.get("Brandweer-1.gif"), Some("B01-C"));
        assert_eq!(table.get("COPI-1.png"), Some("A07"));
        assert_eq!(table.get("Kazerne_Defensie-1.gif"), None);
    }

    #[test]
    fn test_custom_table() {
        let table = SymbolTable::from_pairs(&[("a.gif", "X01")]);
        assert_eq!(table.get("a.gif"), Some("X01"));
        assert!(table.get("b.gif").is_none());
        assert!(!table.is_empty());
        assert!(SymbolTable::new().is_empty());
    }
}
