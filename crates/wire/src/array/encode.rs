//! Array-literal encoding

use uuid::Uuid;

/// Length of a hyphenated UUID plus its two quotes
const QUOTED_LEN: usize = 38;

/// Encode UUIDs as `{"<id>",...}` in iteration order
///
/// Callers that need a canonical order sort before calling.
pub fn encode_array<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a Uuid>,
{
    let ids = ids.into_iter();
    let mut out = String::with_capacity(2 + ids.size_hint().0 * (QUOTED_LEN + 1));
    let mut buf = Uuid::encode_buffer();

    out.push('{');
    for (i, id) in ids.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(id.hyphenated().encode_lower(&mut buf));
        out.push('"');
    }
    out.push('}');
    out
}
