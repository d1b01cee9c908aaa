//! Region tokens and the `RegionSet`.
//!
//! Callers supply region names inconsistently ("Baden-Wuerttemberg",
//! "SACHSEN", " bayern ").  Matching must therefore be centralized on a
//! normalized form: trimmed, lowercase, with `-` replaced by `_`.

use std::collections::BTreeSet;

/// Normalize a region name to its canonical token.
///
/// Trims whitespace, lowercases, and replaces `-` with `_`.  Normalization
/// is a fixed point: applying it to an already-normalized token returns the
/// token unchanged.
pub fn normalize(region: &str) -> String {
    region.trim().to_lowercase().replace('-', "_")
}

/// The sixteen German federal states as normalized region tokens.
pub mod states {
    /// Baden-Württemberg.
    pub const BADEN_WUERTTEMBERG: &str = "baden_wuerttemberg";
    /// Bayern.
    pub const BAYERN: &str = "bayern";
    /// Berlin.
    pub const BERLIN: &str = "berlin";
    /// Brandenburg.
    pub const BRANDENBURG: &str = "brandenburg";
    /// Bremen.
    pub const BREMEN: &str = "bremen";
    /// Hamburg.
    pub const HAMBURG: &str = "hamburg";
    /// Hessen.
    pub const HESSEN: &str = "hessen";
    /// Mecklenburg-Vorpommern.
    pub const MECKLENBURG_VORPOMMERN: &str = "mecklenburg_vorpommern";
    /// Niedersachsen.
    pub const NIEDERSACHSEN: &str = "niedersachsen";
    /// Nordrhein-Westfalen.
    pub const NORDRHEIN_WESTFALEN: &str = "nordrhein_westfalen";
    /// Rheinland-Pfalz.
    pub const RHEINLAND_PFALZ: &str = "rheinland_pfalz";
    /// Saarland.
    pub const SAARLAND: &str = "saarland";
    /// Sachsen.
    pub const SACHSEN: &str = "sachsen";
    /// Sachsen-Anhalt.
    pub const SACHSEN_ANHALT: &str = "sachsen_anhalt";
    /// Schleswig-Holstein.
    pub const SCHLESWIG_HOLSTEIN: &str = "schleswig_holstein";
    /// Thüringen.
    pub const THUERINGEN: &str = "thueringen";

    /// All sixteen federal states.
    pub const ALL: [&str; 16] = [
        BADEN_WUERTTEMBERG,
        BAYERN,
        BERLIN,
        BRANDENBURG,
        BREMEN,
        HAMBURG,
        HESSEN,
        MECKLENBURG_VORPOMMERN,
        NIEDERSACHSEN,
        NORDRHEIN_WESTFALEN,
        RHEINLAND_PFALZ,
        SAARLAND,
        SACHSEN,
        SACHSEN_ANHALT,
        SCHLESWIG_HOLSTEIN,
        THUERINGEN,
    ];
}

/// An owned, order-irrelevant set of normalized region tokens.
///
/// Created empty; an empty set means no region restriction was declared for
/// the subject (which region-gated rules treat as "belongs to none").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSet {
    tokens: BTreeSet<String>,
}

impl RegionSet {
    /// Create an empty region set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents wholesale.
    ///
    /// Every entry is normalized; duplicates collapse.  A single region is
    /// passed as a one-element array.
    pub fn set<I, S>(&mut self, regions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokens.clear();
        for region in regions {
            self.add(region.as_ref());
        }
    }

    /// Normalize and insert one region.  No-op if already present.
    pub fn add(&mut self, region: &str) {
        self.tokens.insert(normalize(region));
    }

    /// Remove all regions.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Membership test.  The query is normalized before lookup.
    pub fn contains(&self, region: &str) -> bool {
        self.tokens.contains(&normalize(region))
    }

    /// Iterate over the normalized tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of distinct regions.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Return `true` if no regions are declared.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RegionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = RegionSet::new();
        set.set(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for RegionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for region in iter {
            self.add(region.as_ref());
        }
    }
}
