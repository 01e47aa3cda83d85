/// URL slug derived from canonical text.
///
/// Letters and digits in any script are kept; every other run becomes a single
/// `-`. Two sayings with the same canonical text get the same slug, which is what
/// lets a slug resolve to a canonical saying.
#[must_use]
pub fn slugify(canonical: &str) -> String {
    let mut slug = String::with_capacity(canonical.len());
    let mut pending_dash = false;
    for c in canonical.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        return "saying".to_owned();
    }
    slug
}
