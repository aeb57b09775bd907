//! Uniform selection helpers over a [`RandomPort`].

use charforge_domain::Sex;

use crate::infrastructure::ports::RandomPort;

/// Pick one element of `items` uniformly.
///
/// # Panics
///
/// Panics if `items` is empty. Callers check emptiness first and report
/// the missing dataset instead.
pub fn pick<'a, T>(random: &dyn RandomPort, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "pick called on an empty slice");
    &items[random.gen_index(items.len())]
}

/// Pick a sex, 50/50.
pub fn pick_sex(random: &dyn RandomPort) -> Sex {
    if random.gen_bool() {
        Sex::Male
    } else {
        Sex::Female
    }
}
