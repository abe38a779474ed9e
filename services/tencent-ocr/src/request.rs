use serde::Serialize;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use tc3sign_core::hash::base64_encode;
use tc3sign_core::{Error, Result};

/// Which side of the ID card the image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardSide {
    /// Portrait side: name, sex, nation, birth, address, id number.
    Front,
    /// Emblem side: issuing authority and validity period.
    Back,
}

impl Display for CardSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CardSide::Front => f.write_str("FRONT"),
            CardSide::Back => f.write_str("BACK"),
        }
    }
}

impl FromStr for CardSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FRONT" => Ok(CardSide::Front),
            "BACK" => Ok(CardSide::Back),
            _ => Err(Error::request_invalid(format!(
                "card side must be FRONT or BACK, got {s:?}"
            ))),
        }
    }
}

/// Request body of `IDCardOCR`.
///
/// Serialized with PascalCase keys, for example
/// `{"ImageBase64":"...","CardSide":"FRONT"}`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdCardOcrRequest {
    /// Image content, base64 without line wrapping.
    pub image_base64: String,
    /// Side of the card shown in the image.
    pub card_side: CardSide,
}

impl IdCardOcrRequest {
    /// Build a request from raw image bytes.
    ///
    /// The bytes are treated as opaque: decoding, downscaling and
    /// re-encoding belong to the image source.
    pub fn from_image(image: &[u8], card_side: CardSide) -> Self {
        Self {
            image_base64: base64_encode(image),
            card_side,
        }
    }

    /// Serialize into the exact bytes that get signed and sent.
    pub fn to_body(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| {
            Error::request_invalid("failed to serialize IDCardOCR request").with_source(e)
        })
    }
}

impl Debug for IdCardOcrRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdCardOcrRequest")
            .field("image_base64_len", &self.image_base64.len())
            .field("card_side", &self.card_side)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_to_body() {
        let req = IdCardOcrRequest::from_image(b"hello", CardSide::Front);

        assert_eq!(
            String::from_utf8(req.to_body().unwrap()).unwrap(),
            r#"{"ImageBase64":"aGVsbG8=","CardSide":"FRONT"}"#
        );
    }

    #[test]
    fn test_back_side_body() {
        let req = IdCardOcrRequest::from_image(&[0xff, 0xd8, 0xff], CardSide::Back);

        assert_eq!(
            String::from_utf8(req.to_body().unwrap()).unwrap(),
            r#"{"ImageBase64":"/9j/","CardSide":"BACK"}"#
        );
    }

    #[test_case("FRONT", CardSide::Front; "upper")]
    #[test_case("back", CardSide::Back; "lower")]
    #[test_case(" Front ", CardSide::Front; "padded")]
    fn test_card_side_from_str(input: &str, expected: CardSide) {
        assert_eq!(input.parse::<CardSide>().unwrap(), expected);
    }

    #[test]
    fn test_card_side_from_str_invalid() {
        assert!("side".parse::<CardSide>().is_err());
    }

    #[test]
    fn test_debug_hides_image() {
        let req = IdCardOcrRequest::from_image(b"hello", CardSide::Front);
        let output = format!("{req:?}");

        assert!(!output.contains("aGVsbG8="));
        assert!(output.contains("image_base64_len: 8"));
    }
}
