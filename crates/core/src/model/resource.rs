use serde::Deserialize;

/// One recommended educational resource; display-only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource {
    /// Kind tag, e.g. "Livre" or "Vidéo". `type` on the wire.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub why_useful: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_maps_to_kind() {
        let resource: Resource = serde_json::from_str(
            r#"{
                "type": "Livre",
                "title": "The Rust Book",
                "description": "Introduction officielle.",
                "why_useful": "Couvre les bases."
            }"#,
        )
        .unwrap();
        assert_eq!(resource.kind, "Livre");
        assert_eq!(resource.title, "The Rust Book");
    }

    #[test]
    fn partial_resource_still_deserializes() {
        let resource: Resource = serde_json::from_str(r#"{"title": "Sans type"}"#).unwrap();
        assert!(resource.kind.is_empty());
        assert!(resource.why_useful.is_empty());
    }
}
