//! Tag-file rendering: the fixed `!_TAG_*` header block and one
//! tab-separated line per sorted tag.

use std::io;

use crate::tag::Tag;

/// The 6-line header every tag file starts with, emitted once before
/// any file is processed. Program fields come from the crate metadata.
pub fn header() -> String {
    [
        "!_TAG_FILE_FORMAT\t2\t/extended format/".to_string(),
        "!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted, 2=foldcase/".to_string(),
        format!(
            "!_TAG_PROGRAM_AUTHOR\t{}\t//",
            env!("CARGO_PKG_AUTHORS")
        ),
        format!("!_TAG_PROGRAM_NAME\t{}\t//", env!("CARGO_PKG_NAME")),
        format!(
            "!_TAG_PROGRAM_URL\t{}\t/github repository/",
            env!("CARGO_PKG_REPOSITORY")
        ),
        format!("!_TAG_PROGRAM_VERSION\t{}\t//", env!("CARGO_PKG_VERSION")),
    ]
    .join("\n")
}

/// Write one line per tag, in the order given. Callers pass the output
/// of [`crate::collector::TagCollector::into_sorted`].
pub fn write_tags<W: io::Write>(out: &mut W, tags: &[Tag]) -> io::Result<()> {
    for tag in tags {
        writeln!(out, "{tag}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{locate_pattern, TagKind};

    #[test]
    fn header_has_six_lines_in_order() {
        let header = header();
        let lines: Vec<_> = header.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "!_TAG_FILE_FORMAT\t2\t/extended format/");
        assert_eq!(
            lines[1],
            "!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted, 2=foldcase/"
        );
        assert!(lines[2].starts_with("!_TAG_PROGRAM_AUTHOR\t"));
        assert_eq!(lines[3], "!_TAG_PROGRAM_NAME\tjstags\t//");
        assert!(lines[4].starts_with("!_TAG_PROGRAM_URL\t"));
        assert!(lines[5].starts_with("!_TAG_PROGRAM_VERSION\t"));
    }

    #[test]
    fn writes_one_line_per_tag() {
        let tags = vec![
            Tag::new("a", "x.js", locate_pattern(0, "a"), TagKind::Function, 1),
            Tag::new("b", "x.js", locate_pattern(2, "b"), TagKind::Import, 3),
        ];

        let mut out = Vec::new();
        write_tags(&mut out, &tags).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "a\tx.js\t0/\\<a\\>/;\"\tf\tlineno:1\nb\tx.js\t2/\\<b\\>/;\"\ti\tlineno:3\n"
        );
    }
}
