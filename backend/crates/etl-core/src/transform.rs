use crate::{RawUser, UserRecord};

/// Reshape raw source objects into [`UserRecord`]s.
///
/// Pure and order-preserving: output\[i\] comes from input\[i\], and the
/// output always has the same length as the input.
pub fn transform(raw: &[RawUser]) -> Vec<UserRecord> {
    raw.iter()
        .zip(1_i64..)
        .map(|(user, ordinal)| UserRecord::from_raw(user, ordinal))
        .collect()
}
