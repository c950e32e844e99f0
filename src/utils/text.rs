/// Split a `Keywords: ... Abstract: ...` blob into `(abstract, keywords)`.
///
/// Either part comes back empty when its delimiter is missing.
///
/// ```
/// use timetable::utils::split_abstract;
///
/// let (abstract_text, keywords) =
///     split_abstract("Keywords: Grasping, SLAM\nAbstract: We grasp.");
/// assert_eq!(abstract_text, "We grasp.");
/// assert_eq!(keywords, "Grasping, SLAM");
/// ```
pub fn split_abstract(raw: &str) -> (String, String) {
    let (head, abstract_text) = match raw.split_once("Abstract: ") {
        Some((head, rest)) => (head, rest),
        None => (raw, ""),
    };

    let keywords = head
        .split_once("Keywords: ")
        .map(|(_, keywords)| keywords)
        .unwrap_or("");

    (abstract_text.trim().to_string(), keywords.trim().to_string())
}

/// Replace line breaks with spaces so cells render on one flow.
pub fn flatten_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}
