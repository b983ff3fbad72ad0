/// Derives a URL-safe slug from a title.
///
/// The title is trimmed and lowercased, every run of characters outside
/// `[a-z0-9]` becomes a single hyphen, and leading/trailing hyphens are
/// stripped. Titles without any ASCII alphanumeric character produce an
/// empty string, which callers must treat as "unable to derive slug".
///
/// # Examples
///
/// ```
/// use devevent_core::normalize::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("   ---   "), "");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            // Separators before the first character are dropped here.
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
