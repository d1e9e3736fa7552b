// Name resolver: picks a pool from the origin and draws first + last names.

use crate::data::{NamePool, ReferenceData};
use crate::player::{Origin, OriginType};
use crate::rng::{pick, RandomStream};

/// The pool a name is drawn from for the given origin.
pub fn pool_for_origin<'a>(origin: &Origin, data: &'a ReferenceData) -> &'a NamePool {
    match origin.kind {
        OriginType::College => &data.north_america,
        OriginType::Country => data.pool_for_country(&origin.value),
    }
}

/// Draw a title-cased "First Last" name. Uniqueness is the caller's job.
pub fn make_name<R: RandomStream + ?Sized>(origin: &Origin, data: &ReferenceData, rng: &mut R) -> String {
    let pool = pool_for_origin(origin, data);
    let first = pick(&pool.first, rng).map(String::as_str).unwrap_or_default();
    let last = pick(&pool.last, rng).map(String::as_str).unwrap_or_default();
    to_title_case(&format!("{first} {last}"))
}

/// Upper-case the first letter of every word.
pub fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if !in_word && c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = c.is_alphanumeric() || c == '_';
    }
    out
}
