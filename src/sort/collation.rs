//! Locale-aware string ordering for text columns.
//!
//! Backed by the Unicode Collation Algorithm with the CLDR root tailoring.
//! Accented letters sort next to their base letter, case only decides on a
//! tie, and lowercase comes before uppercase. Byte order breaks any
//! remaining tie so the order stays total.

use feruca::Collator;
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Compare two strings with the root-locale collator.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}
