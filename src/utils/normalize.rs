//! Keyword normalization and tag popularity counting.
//!
//! Keywords are compared after Unicode NFC composition, lowercasing and
//! trimming, so that `Deep Learning` and ` deep learning` count as one tag
//! and precomposed/decomposed accents do not split a tag in two.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::models::Tag;

/// Separator between keywords in the program's keyword lists.
pub const KEYWORD_SEPARATOR: &str = ", ";

/// Normalize a single keyword into its tag form.
///
/// # Examples
///
/// ```
/// use timetable::utils::normalize_tag;
///
/// assert_eq!(normalize_tag("  Deep Learning "), "deep learning");
/// assert_eq!(normalize_tag("Sche\u{301}ma"), "sch\u{e9}ma");
/// ```
pub fn normalize_tag(keyword: &str) -> String {
    fold_case(keyword).trim().to_string()
}

/// NFC composition followed by lowercasing; the form search terms are
/// compared in.
pub fn fold_case(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Count tags across keyword lists.
///
/// Ordered by count, most frequent first; equal counts keep the order in
/// which the tag was first seen.
pub fn count_tags<'a, I>(keyword_lists: I) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tags: Vec<Tag> = Vec::new();

    for list in keyword_lists {
        for keyword in list.split(KEYWORD_SEPARATOR) {
            let name = normalize_tag(keyword);
            if name.is_empty() {
                continue;
            }
            match index.get(&name) {
                Some(&i) => tags[i].count += 1,
                None => {
                    index.insert(name.clone(), tags.len());
                    tags.push(Tag { name, count: 1 });
                }
            }
        }
    }

    // stable: ties stay in first-seen order
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("SLAM"), "slam");
        assert_eq!(normalize_tag("\tMotion Planning\n"), "motion planning");
        assert_eq!(normalize_tag("Caf\u{65}\u{301}"), normalize_tag("Caf\u{e9}"));
    }

    #[test]
    fn test_fold_case_keeps_whitespace() {
        assert_eq!(fold_case(" Cafe\u{301} Robots "), " caf\u{e9} robots ");
    }

    #[test]
    fn test_count_tags() {
        let tags = count_tags([
            "Grasping, Deep Learning",
            "SLAM, deep learning",
            "Deep Learning, Grasping, Legged Robots",
        ]);
        assert_eq!(
            tags,
            vec![
                Tag { name: "deep learning".into(), count: 3 },
                Tag { name: "grasping".into(), count: 2 },
                Tag { name: "slam".into(), count: 1 },
                Tag { name: "legged robots".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_count_tags_skips_empty() {
        let tags = count_tags(["", "SLAM, ", " , SLAM"]);
        assert_eq!(tags, vec![Tag { name: "slam".into(), count: 2 }]);
    }
}
