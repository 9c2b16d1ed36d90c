use serde::{Deserialize, Serialize};

/// A partner as stored by the backend.
///
/// The backend is document-store shaped: the identifier travels as `_id`, and
/// `images` can be missing entirely for records created through other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<PartnerImage>,
}

impl Partner {
    /// URL of the first image — the only one the admin view ever shows.
    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().map(|img| img.url.as_str())
    }
}

/// A hosted image attached to a partner.
///
/// The server attaches more fields (upload id, dimensions); only the URL is
/// consumed here, the rest is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerImage {
    pub url: String,
}

/// An image picked in the browser, staged for a multipart upload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_deserializes_from_server_payload() {
        let partner: Partner = serde_json::from_str(
            r#"{"_id":"1","name":"Acme","images":[{"url":"/img/1.png"}]}"#,
        )
        .unwrap();

        assert_eq!(partner.id, "1");
        assert_eq!(partner.name, "Acme");
        assert_eq!(partner.first_image_url(), Some("/img/1.png"));
    }

    #[test]
    fn missing_images_defaults_to_empty() {
        let partner: Partner =
            serde_json::from_str(r#"{"_id":"2","name":"NoLogo"}"#).unwrap();

        assert!(partner.images.is_empty());
        assert_eq!(partner.first_image_url(), None);
    }

    #[test]
    fn extra_image_fields_are_ignored() {
        let partner: Partner = serde_json::from_str(
            r#"{"_id":"3","name":"Extra","images":[{"url":"/a.png","public_id":"abc"}]}"#,
        )
        .unwrap();

        assert_eq!(partner.first_image_url(), Some("/a.png"));
    }

    #[test]
    fn only_the_first_image_is_surfaced() {
        let partner: Partner = serde_json::from_str(
            r#"{"_id":"4","name":"Two","images":[{"url":"/first.png"},{"url":"/second.png"}]}"#,
        )
        .unwrap();

        assert_eq!(partner.first_image_url(), Some("/first.png"));
    }
}
