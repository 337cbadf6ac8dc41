// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! Rewriting assembly attribute declarations in `AssemblyInfo.cs` text.
//!
//! Declarations are matched as literal substrings of the form
//! `[assembly: Name("payload")]`, never parsed as actual C#. This is on
//! purpose: the textual approach is what existing tooling in this ecosystem
//! expects, and it leaves every byte outside the payload untouched.

/// The comment line placed above declarations that we append ourselves.
pub const ADDED_BY_COMMENT: &str = "//added by verstamp";

/// Update every declaration of the named attribute in `text` to carry
/// `value`, or append a brand-new declaration if there are none.
///
/// The value is trimmed of leading and trailing whitespace before insertion.
/// No quoting or escaping is applied here; callers are responsible for
/// sanitizing values that might contain double quotes.
pub fn update_or_add_attribute(text: &str, name: &str, value: &str) -> String {
    let prefix = format!("[assembly: {}(\"", name);

    if text.contains(&prefix) {
        replace_all_payloads(text, &prefix, value)
    } else {
        format!(
            "{}\n{}\n{}{}\")]",
            text,
            ADDED_BY_COMMENT,
            prefix,
            value.trim()
        )
    }
}

/// Replace the payload of every occurrence of a declaration prefix.
///
/// The scan carries a cursor that always points just past the payload most
/// recently spliced in, measured against the already-edited text, so repeated
/// attribute declarations are each rewritten exactly once. An occurrence
/// whose terminating `")]` is missing ends the scan with the text as-is up to
/// that point; malformed input is left alone rather than truncated.
fn replace_all_payloads(text: &str, prefix: &str, value: &str) -> String {
    let value = value.trim();
    let mut text = text.to_owned();
    let mut cursor = 0;

    loop {
        if cursor > text.len() {
            return text;
        }

        let payload_start = match text[cursor..].find(prefix) {
            Some(off) => cursor + off + prefix.len(),
            None => return text,
        };

        let payload_end = match text[payload_start..].find("\")]") {
            Some(off) => payload_start + off,
            None => return text,
        };

        text.replace_range(payload_start..payload_end, value);
        cursor = payload_start + value.len();
    }
}
