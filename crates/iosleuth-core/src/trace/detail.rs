/// Parser for the free-form `Detail` column.
///
/// Grammar, applied left to right over tokens separated by `", "`:
///
/// - `key: value` starts a new field.
/// - `Paging I/O` and `Synchronous Paging I/O` are flags with no value.
/// - Any other bare token continues the previous field's value, which is how
///   multi-valued fields like `I/O Flags: Non-cached, Write Through` read.
/// - `FileName` is terminal: its value is the rest of the string, since file
///   names may themselves contain `", "`.
///
/// Numbers use `,` as a thousands separator (`Length: 4,096`). Those commas
/// are never followed by a space, so they do not split tokens.
use compact_str::CompactString;

const SEPARATOR: &str = ", ";
const KEY_SEPARATOR: &str = ": ";
const TERMINAL_KEY: &str = "FileName";
const PAGING_IO: &str = "Paging I/O";
const SYNCHRONOUS_PAGING_IO: &str = "Synchronous Paging I/O";

/// Structured view of one `Detail` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detail {
    fields: Vec<(CompactString, CompactString)>,
    pub paging_io: bool,
    pub synchronous_paging_io: bool,
}

impl Detail {
    pub fn parse(text: &str) -> Self {
        let mut detail = Detail::default();
        let mut remaining = text.trim();

        while !remaining.is_empty() {
            let (token, tail) = match remaining.find(SEPARATOR) {
                Some(pos) => (&remaining[..pos], &remaining[pos + SEPARATOR.len()..]),
                None => (remaining, ""),
            };

            if let Some((key, value)) = token.split_once(KEY_SEPARATOR) {
                let key = key.trim();
                if key == TERMINAL_KEY {
                    // Same split on the untruncated remainder keeps the full name.
                    let value = remaining
                        .split_once(KEY_SEPARATOR)
                        .map(|(_, v)| v)
                        .unwrap_or(value);
                    detail.push(key, value.trim());
                    break;
                }
                detail.push(key, value.trim());
            } else if token == PAGING_IO {
                detail.paging_io = true;
            } else if token == SYNCHRONOUS_PAGING_IO {
                detail.synchronous_paging_io = true;
            } else if let Some((_, value)) = detail.fields.last_mut() {
                value.push_str(SEPARATOR);
                value.push_str(token);
            }

            remaining = tail;
        }

        detail
    }

    fn push(&mut self, key: &str, value: &str) {
        self.fields
            .push((CompactString::new(key), CompactString::new(value)));
    }

    /// Value of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    /// `true` for either paging-I/O flag.
    pub fn is_paging_io(&self) -> bool {
        self.paging_io || self.synchronous_paging_io
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse an unsigned integer that may contain `,` grouping separators.
pub fn parse_grouped_u64(text: &str) -> Option<u64> {
    let digits: String = text.trim().chars().filter(|&c| c != ',').collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_detail_with_grouped_numbers() {
        let d = Detail::parse("Offset: 1,048,576, Length: 4,096, Priority: Normal");
        assert_eq!(d.get("Offset"), Some("1,048,576"));
        assert_eq!(d.get("Length"), Some("4,096"));
        assert_eq!(d.get("Priority"), Some("Normal"));
        assert_eq!(d.len(), 3);
        assert!(!d.is_paging_io());
    }

    #[test]
    fn paging_flags_are_recognised() {
        let d = Detail::parse(
            "Offset: 0, Length: 8,192, I/O Flags: Non-cached, Paging I/O, Synchronous Paging I/O, Priority: Normal",
        );
        assert!(d.paging_io);
        assert!(d.synchronous_paging_io);
        assert_eq!(d.get("I/O Flags"), Some("Non-cached"));
        assert_eq!(d.get("Priority"), Some("Normal"));
    }

    #[test]
    fn bare_tokens_continue_previous_value() {
        let d = Detail::parse("I/O Flags: Non-cached, Write Through, Length: 10");
        assert_eq!(d.get("I/O Flags"), Some("Non-cached, Write Through"));
        assert_eq!(d.get("Length"), Some("10"));
    }

    /// Everything after `FileName: ` is the destination, separators included.
    #[test]
    fn file_name_consumes_remainder() {
        let d = Detail::parse(
            "ReplaceIfExists: True, FileName: C:\\Users\\dev\\Cache\\a, b: c.txt",
        );
        assert_eq!(d.get("ReplaceIfExists"), Some("True"));
        assert_eq!(d.get("FileName"), Some("C:\\Users\\dev\\Cache\\a, b: c.txt"));
    }

    #[test]
    fn empty_and_stray_input() {
        assert!(Detail::parse("").is_empty());
        assert!(Detail::parse("   ").is_empty());
        // A leading bare token has nothing to attach to and is dropped.
        let d = Detail::parse("stray, Length: 5");
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("Length"), Some("5"));
    }

    #[test]
    fn grouped_numbers() {
        assert_eq!(parse_grouped_u64("4,096"), Some(4096));
        assert_eq!(parse_grouped_u64(" 12 "), Some(12));
        assert_eq!(parse_grouped_u64("1,234,567"), Some(1_234_567));
        assert_eq!(parse_grouped_u64(""), None);
        assert_eq!(parse_grouped_u64(","), None);
        assert_eq!(parse_grouped_u64("-5"), None);
        assert_eq!(parse_grouped_u64("12a"), None);
    }
}
