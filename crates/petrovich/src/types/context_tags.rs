use std::collections::HashMap;

use super::Tag;

/// Per-word context flags checked against a rule's required tags.
///
/// A tag that is absent counts as false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextTags {
    flags: HashMap<Tag, bool>,
}

impl ContextTags {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags for segment `index` of a name split into `count` hyphenated
    /// segments.
    ///
    /// `firstWord` (and its `first_word` spelling) is true only for the first
    /// segment of a name with two or more segments.
    pub fn for_segment(index: usize, count: usize) -> Self {
        let leading = index == 0 && count > 1;
        let mut tags = Self::new();
        tags.set(Tag::FIRST_WORD, leading);
        tags.set(Tag::FIRST_WORD_ALIAS, leading);
        tags
    }

    /// Set a tag to the given value.
    pub fn set(&mut self, tag: impl Into<Tag>, value: bool) {
        self.flags.insert(tag.into(), value);
    }

    /// Whether `tag` is present and true.
    pub fn is_set(&self, tag: &str) -> bool {
        self.flags.get(tag).copied().unwrap_or(false)
    }

    /// Whether every tag in `required` is present and true.
    ///
    /// An empty requirement list is always satisfied.
    pub fn allows(&self, required: &[Tag]) -> bool {
        required.iter().all(|tag| self.is_set(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_segment_of_compound_name_is_first_word() {
        assert!(ContextTags::for_segment(0, 2).is_set(Tag::FIRST_WORD));
        assert!(!ContextTags::for_segment(1, 2).is_set(Tag::FIRST_WORD));
    }

    #[test]
    fn both_spellings_are_set() {
        let tags = ContextTags::for_segment(0, 3);
        assert!(tags.is_set("firstWord"));
        assert!(tags.is_set("first_word"));
        assert!(!ContextTags::for_segment(2, 3).is_set("first_word"));
    }

    #[test]
    fn single_segment_is_not_first_word() {
        assert!(!ContextTags::for_segment(0, 1).is_set(Tag::FIRST_WORD));
    }

    #[test]
    fn empty_requirements_always_allowed() {
        assert!(ContextTags::new().allows(&[]));
    }

    #[test]
    fn false_tag_does_not_satisfy_requirement() {
        let mut tags = ContextTags::new();
        tags.set(Tag::FIRST_WORD, false);
        assert!(!tags.allows(&[Tag::first_word()]));
        tags.set(Tag::FIRST_WORD, true);
        assert!(tags.allows(&[Tag::first_word()]));
    }
}
