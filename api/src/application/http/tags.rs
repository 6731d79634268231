use std::collections::HashMap;

use nutridish_core::domain::recipe::value_objects::DietaryTag;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Map a `{"<label>": bool}` filter object to typed dietary tags.
/// Falsy entries are ignored; unknown labels are rejected.
pub fn parse_dietary_tags(filters: &HashMap<String, bool>) -> Result<Vec<DietaryTag>, ApiError> {
    let mut tags = Vec::new();

    for (label, enabled) in filters {
        if !enabled {
            continue;
        }

        let tag = DietaryTag::from_label(label)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown dietary tag '{label}'")))?;
        tags.push(tag);
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_known_labels_are_parsed() {
        let mut filters = HashMap::new();
        filters.insert("vegetarian".to_string(), true);
        filters.insert("low carb".to_string(), true);
        filters.insert("vegan".to_string(), false);

        let mut tags = parse_dietary_tags(&filters).unwrap();
        tags.sort_by_key(|t| t.label());

        assert_eq!(tags, vec![DietaryTag::LowCarb, DietaryTag::Vegetarian]);
    }

    #[test]
    fn unknown_label_is_a_bad_request() {
        let mut filters = HashMap::new();
        filters.insert("keto".to_string(), true);

        let error = parse_dietary_tags(&filters).unwrap_err();
        assert_eq!(
            error,
            ApiError::BadRequest("unknown dietary tag 'keto'".to_string())
        );
    }

    #[test]
    fn falsy_unknown_label_is_ignored() {
        let mut filters = HashMap::new();
        filters.insert("keto".to_string(), false);

        assert!(parse_dietary_tags(&filters).unwrap().is_empty());
    }
}
