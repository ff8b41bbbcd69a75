//! Text TLV (Tag-Length-Value) encoding as used by EMVCo QR payloads
//!
//! Each field is written as a two-digit tag, a two-digit zero-padded length
//! and the value itself. Lengths are computed by [`TlvList`], never counted
//! by hand.

use crate::core::error::EncodingError;

/// Largest value length a two-digit length field can describe
pub const MAX_VALUE_LEN: usize = 99;

/// Tag plus length prefix size in characters
pub const TLV_HEADER_LEN: usize = 4;

/// A single TLV field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    tag: String,
    value: String,
}

impl TlvField {
    /// Create a field, checking the tag and value length invariants
    pub fn new(tag: &str, value: impl Into<String>) -> Result<Self, EncodingError> {
        let value = value.into();
        check_tag(tag)?;
        if !value.is_ascii() {
            return Err(EncodingError::NonAscii {
                tag: tag.to_string(),
            });
        }
        if value.len() > MAX_VALUE_LEN {
            return Err(EncodingError::ValueTooLong {
                tag: tag.to_string(),
                length: value.len(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            value,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Encoded size including the header
    pub fn encoded_len(&self) -> usize {
        TLV_HEADER_LEN + self.value.len()
    }

    /// Write the field as `tag + length + value`
    pub fn encode(&self) -> String {
        format!("{}{:02}{}", self.tag, self.value.len(), self.value)
    }
}

/// Encode a single field as `tag + zeroPad(len(value), 2) + value`
pub fn tlv(tag: &str, value: &str) -> Result<String, EncodingError> {
    Ok(TlvField::new(tag, value)?.encode())
}

fn check_tag(tag: &str) -> Result<(), EncodingError> {
    if tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(EncodingError::InvalidTag {
            tag: tag.to_string(),
        })
    }
}

/// An ordered list of TLV fields
///
/// ```rust
/// use promptpay::core::tlv::TlvList;
///
/// let mut list = TlvList::new();
/// list.push("00", "01")?.push("58", "TH")?;
/// assert_eq!(list.encode(), "0002015802TH");
/// # Ok::<(), promptpay::core::error::EncodingError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvList {
    fields: Vec<TlvField>,
}

impl TlvList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn push(&mut self, tag: &str, value: impl Into<String>) -> Result<&mut Self, EncodingError> {
        self.fields.push(TlvField::new(tag, value)?);
        Ok(self)
    }

    /// Append a field whose value is another encoded list
    pub fn nested(&mut self, tag: &str, inner: &TlvList) -> Result<&mut Self, EncodingError> {
        self.push(tag, inner.encode())
    }

    /// First field with the given tag
    pub fn get(&self, tag: &str) -> Option<&TlvField> {
        self.fields.iter().find(|field| field.tag == tag)
    }

    pub fn fields(&self) -> &[TlvField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Concatenate every field in order
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.fields.iter().map(TlvField::encoded_len).sum());
        for field in &self.fields {
            out.push_str(&field.encode());
        }
        out
    }
}

/// Parse a flat TLV string back into fields
///
/// Nested values (such as the merchant account block) are returned as
/// their raw encoded string; decode them again to walk into them.
pub fn decode(input: &str) -> Result<TlvList, EncodingError> {
    let mut list = TlvList::new();
    let mut offset = 0;

    while offset < input.len() {
        let header = input
            .get(offset..offset + TLV_HEADER_LEN)
            .ok_or(EncodingError::Truncated { offset })?;
        if !header.is_ascii() {
            return Err(EncodingError::InvalidLength {
                length: header.to_string(),
                offset,
            });
        }
        let (tag, length) = header.split_at(2);

        let value_len: usize = length
            .parse()
            .ok()
            .filter(|_| length.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| EncodingError::InvalidLength {
                length: length.to_string(),
                offset,
            })?;

        let start = offset + TLV_HEADER_LEN;
        let value = input
            .get(start..start + value_len)
            .ok_or(EncodingError::Truncated { offset })?;

        list.push(tag, value)?;
        offset = start + value_len;
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tlv_pads_length() {
        assert_eq!(tlv("00", "01").unwrap(), "000201");
        assert_eq!(tlv("53", "764").unwrap(), "5303764");
        assert_eq!(tlv("54", "125.00").unwrap(), "5406125.00");
        assert_eq!(tlv("62", "").unwrap(), "6200");
    }

    #[test]
    fn test_value_length_boundary() {
        let max = "x".repeat(99);
        let encoded = tlv("26", &max).unwrap();
        assert!(encoded.starts_with("2699"));
        assert_eq!(encoded.len(), 103);

        let too_long = "x".repeat(100);
        assert_eq!(
            tlv("26", &too_long),
            Err(EncodingError::ValueTooLong {
                tag: "26".to_string(),
                length: 100
            })
        );
    }

    #[test]
    fn test_invalid_tags() {
        for tag in ["", "1", "123", "AB", "1a"] {
            assert!(
                matches!(tlv(tag, "x"), Err(EncodingError::InvalidTag { .. })),
                "tag {:?}",
                tag
            );
        }
    }

    #[test]
    fn test_non_ascii_value() {
        assert!(matches!(
            tlv("59", "ร้าน"),
            Err(EncodingError::NonAscii { .. })
        ));
    }

    #[test]
    fn test_nested_list() {
        let mut merchant = TlvList::new();
        merchant
            .push("00", "A000000677010111")
            .unwrap()
            .push("01", "0066812345678")
            .unwrap();

        let mut payload = TlvList::new();
        payload.nested("29", &merchant).unwrap();

        assert_eq!(
            payload.encode(),
            "29370016A00000067701011101130066812345678"
        );
    }

    #[test]
    fn test_get_and_len() {
        let mut list = TlvList::new();
        assert!(list.is_empty());
        list.push("53", "764").unwrap().push("58", "TH").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("58").map(TlvField::value), Some("TH"));
        assert!(list.get("54").is_none());
    }

    #[test]
    fn test_decode_flat_fields() {
        let list = decode("0002010102125802TH").unwrap();
        let tags: Vec<&str> = list.fields().iter().map(TlvField::tag).collect();
        assert_eq!(tags, vec!["00", "01", "58"]);
        assert_eq!(list.get("01").unwrap().value(), "12");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("00"), Err(EncodingError::Truncated { offset: 0 }));
        assert_eq!(decode("000501"), Err(EncodingError::Truncated { offset: 0 }));
        assert_eq!(decode("000201").unwrap().len(), 1);
        assert!(matches!(
            decode("00x201"),
            Err(EncodingError::InvalidLength { .. })
        ));
        assert!(matches!(
            decode("00+101"),
            Err(EncodingError::InvalidLength { .. })
        ));
    }
}
