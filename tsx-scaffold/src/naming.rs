//! Component name normalization

use convert_case::{Case, Casing};

/// Convert a raw component name into its canonical `PascalCase` identifier.
///
/// The name is split on every non-alphanumeric character and the separators
/// are dropped. All-lowercase segments are Pascal-cased; segments that already
/// contain capitals keep their inner casing and only get a capital first
/// letter, so `HTTPServer` and `userCard` survive intact.
///
/// Applying the function to its own output returns the same string.
///
/// # Examples
///
/// ```
/// use tsx_scaffold::naming::to_component_name;
///
/// assert_eq!(to_component_name("home"), "Home");
/// assert_eq!(to_component_name("user-card"), "UserCard");
/// assert_eq!(to_component_name("UserCard"), "UserCard");
/// ```
#[must_use]
pub fn to_component_name(raw: &str) -> String {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.chars().any(char::is_uppercase) {
                capitalize(segment)
            } else {
                segment.to_case(Case::Pascal)
            }
        })
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
