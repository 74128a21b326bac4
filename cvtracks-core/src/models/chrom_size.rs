///
/// One line of a chrom sizes table: a chromosome name exactly as it appears in
/// the file, and its length in bases.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct ChromSize {
    pub name: String,
    pub length: u32,
}

impl ChromSize {
    pub fn new(name: impl Into<String>, length: u32) -> Self {
        ChromSize {
            name: name.into(),
            length,
        }
    }
}
