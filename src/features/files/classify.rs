/// Broad grouping of archive files, derived from the file name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Document,
    Media,
    Report,
}

/// Classify by extension, case-insensitive. Unknown or missing extensions
/// count as documents.
pub fn classify(file_name: &str) -> FileKind {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" | "png" | "webp" => FileKind::Media,
        "csv" | "xls" | "xlsx" => FileKind::Report,
        _ => FileKind::Document,
    }
}

/// Per-kind counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSummary {
    pub documents: usize,
    pub media: usize,
    pub reports: usize,
}

pub fn summarize<'a, I>(kinds: I) -> FileSummary
where
    I: IntoIterator<Item = FileKind>,
{
    let mut summary = FileSummary::default();
    for kind in kinds {
        match kind {
            FileKind::Document => summary.documents += 1,
            FileKind::Media => summary.media += 1,
            FileKind::Report => summary.reports += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension_case_insensitively() {
        assert_eq!(classify("photo.PNG"), FileKind::Media);
        assert_eq!(classify("scan.jpeg"), FileKind::Media);
        assert_eq!(classify("ledger.xlsx"), FileKind::Report);
        assert_eq!(classify("rows.CSV"), FileKind::Report);
        assert_eq!(classify("brief.pdf"), FileKind::Document);
    }

    #[test]
    fn missing_or_unknown_extension_is_a_document() {
        assert_eq!(classify("README"), FileKind::Document);
        assert_eq!(classify("archive.tar.gz"), FileKind::Document);
    }

    #[test]
    fn summary_counts_each_kind() {
        let kinds = ["a.pdf", "b.png", "c.xlsx", "d.txt"].map(classify);
        assert_eq!(
            summarize(kinds),
            FileSummary {
                documents: 2,
                media: 1,
                reports: 1
            }
        );
    }
}
