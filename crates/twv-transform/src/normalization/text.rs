/// Upper-case `text` when `uppercase` is set, otherwise copy it unchanged.
pub fn normalize_text(text: &str, uppercase: bool) -> String {
    if uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}
