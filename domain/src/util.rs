//! Helpers for log output.

/// Cut `text` to at most `max_bytes` for a log line.
///
/// The cut moves back to the previous character start, so patient names
/// and argument dumps with non-ASCII characters stay valid UTF-8.
pub fn truncate_str(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let end = text
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max_bytes)
        .last()
        .unwrap_or(0);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_untouched() {
        let text = "Cek tagihan Budi Santoso";
        assert_eq!(truncate_str(text, 100), text);
        assert_eq!(truncate_str("", 100), "");
    }

    #[test]
    fn test_long_message_is_cut() {
        let text = "Tolong daftarkan pasien baru bernama Budi Santoso, keluhan demam tinggi.";
        assert_eq!(truncate_str(text, 16), "Tolong daftarkan");
    }

    #[test]
    fn test_cut_inside_degree_sign() {
        // "°" spans bytes 23..25
        let text = "Keluhan demam tinggi 39°C sejak kemarin";
        assert_eq!(truncate_str(text, 24), "Keluhan demam tinggi 39");
        assert_eq!(truncate_str(text, 25), "Keluhan demam tinggi 39°");
    }

    #[test]
    fn test_cut_inside_argument_dump() {
        let args = r#"{"action":"book","patientName":"Zoë Ananta"}"#;
        let cut = args.find('ë').unwrap() + 1;
        assert_eq!(truncate_str(args, cut), r#"{"action":"book","patientName":"Zo"#);
    }
}
