use fxhash::FxHashMap;

///
/// INFO annotations of a single record. Every key maps to its comma-split
/// values; flags carry an empty list.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct VariantInfo {
    fields: FxHashMap<String, Vec<String>>,
}

impl VariantInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.fields.insert(key.into(), values);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(|v| v.as_slice())
    }

    /// First value of a multi-valued annotation.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(|v| v.as_str())
    }

    /// All values of an annotation joined back together with commas.
    pub fn joined(&self, key: &str) -> Option<String> {
        self.get(key).map(|values| values.join(","))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for VariantInfo {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        let mut info = VariantInfo::new();
        for (key, values) in iter {
            info.insert(key, values);
        }
        info
    }
}

///
/// A raw variant record as read from the VCF, before any filtering.
///
#[derive(PartialEq, Debug, Clone)]
pub struct VariantRecord {
    /// Chromosome name as written in the file, prefix and all.
    pub chrom: String,
    /// 1-based position.
    pub pos: u64,
    pub ref_allele: String,
    /// ALT alleles. Empty when the column holds the missing value.
    pub alt_alleles: Vec<String>,
    pub info: VariantInfo,
}
