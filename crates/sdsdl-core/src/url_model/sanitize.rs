//! Filesystem-safe filename mapping.

/// Linux NAME_MAX.
pub(crate) const NAME_MAX: usize = 255;

/// Replaces NUL, `/`, `\` and control characters with `_`.
///
/// Unlike a general-purpose sanitizer this never trims or collapses, so two
/// distinct safe names stay distinct.
pub(crate) fn sanitize_component(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
