use std::cmp::Ordering;

use neotx_core::Utxo;

/// A spend candidate with its resolved value
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Position in the caller's candidate list
    pub index: usize,
    pub value: f64,
    pub utxo: &'a Utxo,
}

/// Order two candidates by value (smaller first)
pub fn by_value(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    a.value.total_cmp(&b.value)
}

/// Sort candidates by ascending value.
///
/// The sort is stable: equal values keep their input order.
pub fn ascending_by_value<'a>(candidates: impl IntoIterator<Item = Candidate<'a>>) -> Vec<Candidate<'a>> {
    let mut ordered: Vec<Candidate<'a>> = candidates.into_iter().collect();
    ordered.sort_by(by_value);
    ordered
}
