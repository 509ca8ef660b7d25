use std::fs;
use std::path::Path;

/// A document touching every block kind the renderer draws
pub const SAMPLE_DOCUMENT: &str = "\
# Release Notes

This release adds *parallel* conversion and fixes **two** bugs.

## Changes

- Faster startup
- Smaller output

1. Install
2. Run

```sh
mdpdf docs/
```

---

> Quoted remark.
";

/// Markdown long enough to span several pages
pub fn long_document(paragraphs: usize) -> String {
    (1..=paragraphs)
        .map(|i| format!("Paragraph number {} with enough words to take up a line of body text.\n\n", i))
        .collect()
}

/// Rules, code blocks and text repeated until they run over several pages
pub fn mixed_block_document(sections: usize) -> String {
    (1..=sections)
        .map(|i| {
            format!(
                "Section {} opens with a short line.\n\n---\n\n```\nlet n = {};\nprintln!(\"{{}}\", n);\n```\n\n",
                i, i
            )
        })
        .collect()
}

/// Write `contents` to `dir/name`, creating parent directories
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
