use serde::Deserialize;

/// One priced destination. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: u32,
}

/// Static destination → price mapping, immutable for the session.
///
/// Entries keep their declaration order because the menu numbers them;
/// a `HashMap` would shuffle the listing between runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

const DEFAULT_PRICES: &[(&str, u32)] = &[
    ("The government museum bengaluru", 100),
    ("Gandhi bavan bengaluru", 150),
    ("Kempegowda museum bengaluru", 200),
    ("Venkatappa art gallery bengaluru", 180),
    ("NIMHANS brain museum bengaluru", 250),
    ("National gallery of modern art bengaluru", 270),
    ("HAL heritage centre and aerospce museum bengaluru", 300),
];

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_PRICES
                .iter()
                .map(|&(name, price)| CatalogEntry {
                    name: name.to_string(),
                    price,
                })
                .collect(),
        }
    }
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Loads a catalog from a JSON file of `{"name", "price"}` entries.
    pub fn from_path(path: &std::path::Path) -> crate::error::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Price for a destination. Unknown names are not an error: the
    /// price is 0 and callers treat 0 as "not priced".
    pub fn price_of(&self, destination: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.name == destination)
            .map_or(0, |e| e.price)
    }

    /// Entry at a 0-based menu position.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_prices() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.price_of("The government museum bengaluru"), 100);
        assert_eq!(catalog.price_of("Gandhi bavan bengaluru"), 150);
        assert_eq!(
            catalog.price_of("HAL heritage centre and aerospce museum bengaluru"),
            300
        );
    }

    #[test]
    fn test_unknown_destination_is_unpriced() {
        let catalog = Catalog::default();
        assert_eq!(catalog.price_of("Louvre"), 0);
    }

    #[test]
    fn test_listing_order_is_stable() {
        let catalog = Catalog::default();
        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names[0], "The government museum bengaluru");
        assert_eq!(names[1], "Gandhi bavan bengaluru");
        assert_eq!(names[6], "HAL heritage centre and aerospce museum bengaluru");
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[{"name": "Planetarium", "price": 80}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_of("Planetarium"), 80);
        assert_eq!(catalog.get(0).unwrap().price, 80);
    }
}
