use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static FRONTMATTER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\A---\s*\n((?s:.)*?)\n---").ok());

/// Key/value pairs from a review's frontmatter block, values trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume into the underlying map.
    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

/// Parse the `---` delimited block at the very start of `content`.
///
/// Each line is split at its first `:`; lines without a key before the
/// colon are ignored and a repeated key keeps its last value. Returns
/// `None` when the file does not open with a frontmatter block.
pub fn parse_frontmatter(content: &str) -> Option<Frontmatter> {
    let re = FRONTMATTER.as_ref()?;
    let block = re.captures(content)?.get(1)?.as_str();

    let mut fields = BTreeMap::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        fields.insert(key.trim().to_string(), value.trim().to_string());
    }

    Some(Frontmatter { fields })
}
