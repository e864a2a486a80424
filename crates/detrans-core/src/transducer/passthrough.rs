use std::borrow::Cow;

const APOS_ENTITY: &str = "&apos;";

/// Replace every `&apos;` with a literal apostrophe.
pub(crate) fn normalize_apostrophes(text: &str) -> Cow<'_, str> {
    if text.contains(APOS_ENTITY) {
        Cow::Owned(text.replace(APOS_ENTITY, "'"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Copy `rest` up to and including the first `stop`, or to the end when
/// there is none. Returns the number of bytes copied.
pub(super) fn copy_through(rest: &str, stop: char, out: &mut String) -> usize {
    let end = rest
        .find(stop)
        .map_or(rest.len(), |i| i + stop.len_utf8());
    out.push_str(&rest[..end]);
    end
}
