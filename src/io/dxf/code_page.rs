//! `$DWGCODEPAGE` names and the text encoding they select on output.
//!
//! Before AC1021 strings are transcoded into the drawing's code page;
//! AC1021 and later are always UTF-8.

use encoding_rs::Encoding;
use once_cell::sync::Lazy;

use crate::types::DxfVersion;

/// Code page written to `$DWGCODEPAGE` when a document names none
pub const DEFAULT_CODE_PAGE: &str = "ANSI_1252";

/// Code page names and their single- or multi-byte encodings.
///
/// DOS code pages without an `encoding_rs` counterpart use the Windows page
/// covering the same script.
static CODE_PAGES: Lazy<Vec<CodePage>> = Lazy::new(|| {
    vec![
        page(
            &["ansi_1252", "dos437", "dos850", "dos860", "dos861", "dos863", "dos865", "iso8859-1"],
            encoding_rs::WINDOWS_1252,
        ),
        page(&["ansi_1250", "dos852"], encoding_rs::WINDOWS_1250),
        page(&["ansi_1251"], encoding_rs::WINDOWS_1251),
        page(&["ansi_1253", "dos869"], encoding_rs::WINDOWS_1253),
        page(&["ansi_1254", "dos857", "iso8859-9"], encoding_rs::WINDOWS_1254),
        page(&["ansi_1255"], encoding_rs::WINDOWS_1255),
        page(&["ansi_1256"], encoding_rs::WINDOWS_1256),
        page(&["ansi_1257"], encoding_rs::WINDOWS_1257),
        page(&["ansi_1258"], encoding_rs::WINDOWS_1258),
        page(&["ansi_874"], encoding_rs::WINDOWS_874),
        page(&["dos855", "dos866"], encoding_rs::IBM866),
        page(&["ansi_932"], encoding_rs::SHIFT_JIS),
        page(&["ansi_936", "gb2312"], encoding_rs::GBK),
        page(&["ansi_949", "korean", "johab"], encoding_rs::EUC_KR),
        page(&["ansi_950", "big5"], encoding_rs::BIG5),
        page(&["iso8859-2"], encoding_rs::ISO_8859_2),
        page(&["iso8859-3"], encoding_rs::ISO_8859_3),
        page(&["iso8859-4"], encoding_rs::ISO_8859_4),
        page(&["iso8859-5"], encoding_rs::ISO_8859_5),
        page(&["iso8859-6"], encoding_rs::ISO_8859_6),
        page(&["iso8859-7"], encoding_rs::ISO_8859_7),
        page(&["iso8859-8"], encoding_rs::ISO_8859_8),
        page(&["iso8859-10"], encoding_rs::ISO_8859_10),
        page(&["iso8859-13"], encoding_rs::ISO_8859_13),
        page(&["iso8859-14"], encoding_rs::ISO_8859_14),
        page(&["iso8859-15"], encoding_rs::ISO_8859_15),
        page(&["koi8-r"], encoding_rs::KOI8_R),
        page(&["koi8-u"], encoding_rs::KOI8_U),
    ]
});

type CodePage = (&'static [&'static str], &'static Encoding);

fn page(names: &'static [&'static str], encoding: &'static Encoding) -> CodePage {
    (names, encoding)
}

/// Output encoding for a document of the given version; `None` writes UTF-8.
pub fn output_encoding(version: DxfVersion, code_page: &str) -> Option<&'static Encoding> {
    if version.is_unicode() {
        None
    } else {
        encoding_from_code_page(code_page)
    }
}

/// Encoding selected by a code page name.
///
/// Case-insensitive, and `iso_8859-N` is accepted for `iso8859-N`. UTF-8
/// names give `None`; unknown names fall back to Windows-1252.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.to_ascii_lowercase().replacen("iso_", "iso", 1);
    if matches!(name.as_str(), "ascii" | "utf-8" | "utf8" | "unicode") {
        return None;
    }

    CODE_PAGES
        .iter()
        .find(|(names, _)| names.contains(&name.as_str()))
        .map(|&(_, encoding)| encoding)
        .or(Some(encoding_rs::WINDOWS_1252))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(encoding_from_code_page("ANSI_1251"), Some(encoding_rs::WINDOWS_1251));
        assert_eq!(
            encoding_from_code_page("ansi_1251"),
            encoding_from_code_page("ANSI_1251")
        );
    }

    #[test]
    fn test_iso_spellings() {
        assert_eq!(encoding_from_code_page("ISO8859-2"), Some(encoding_rs::ISO_8859_2));
        assert_eq!(encoding_from_code_page("ISO_8859-2"), Some(encoding_rs::ISO_8859_2));
    }

    #[test]
    fn test_utf8_names_and_unknown_fallback() {
        assert_eq!(encoding_from_code_page("UTF-8"), None);
        assert_eq!(encoding_from_code_page("ASCII"), None);
        assert_eq!(
            encoding_from_code_page("SOMETHING_UNKNOWN"),
            Some(encoding_rs::WINDOWS_1252)
        );
    }

    #[test]
    fn test_multibyte_pages() {
        assert_eq!(encoding_from_code_page("GB2312"), Some(encoding_rs::GBK));
        assert_eq!(encoding_from_code_page("ANSI_932"), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(encoding_from_code_page("KOREAN"), Some(encoding_rs::EUC_KR));
    }

    #[test]
    fn test_unicode_versions_skip_code_page() {
        assert_eq!(output_encoding(DxfVersion::AC1032, "ANSI_1251"), None);
        assert_eq!(output_encoding(DxfVersion::AC1021, "ANSI_1251"), None);
        assert_eq!(
            output_encoding(DxfVersion::AC1015, "ANSI_1251"),
            Some(encoding_rs::WINDOWS_1251)
        );
    }
}
