use crate::models::ContactRecord;

/// Prefilled-entry ids for one Google Forms deployment. Each form
/// assigns its own numeric ids, so the mapping is configurable.
#[derive(Debug, Clone)]
pub struct FormFieldMap {
    pub name: u64,
    pub email: u64,
    pub country_code: u64,
    pub phone: u64,
    pub location: u64,
    pub message: u64,
}

impl Default for FormFieldMap {
    /// Ids taken from the production contact form
    fn default() -> Self {
        Self {
            name: 1065878465,
            email: 949387187,
            country_code: 2029084220,
            phone: 992718981,
            location: 546523940,
            message: 181614183,
        }
    }
}

/// Map a contact record to formResponse body parameters
pub fn map_record_to_entries(
    record: &ContactRecord,
    fields: &FormFieldMap,
) -> Vec<(String, String)> {
    vec![
        (entry_key(fields.name), record.name.clone()),
        (entry_key(fields.email), record.email.clone()),
        (entry_key(fields.country_code), record.country_code.clone()),
        (entry_key(fields.phone), record.phone.clone()),
        (entry_key(fields.location), record.location.clone()),
        (entry_key(fields.message), record.message.clone()),
    ]
}

fn entry_key(id: u64) -> String {
    format!("entry.{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ContactRecord {
        ContactRecord {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            country_code: "+91".to_string(),
            phone: "9876543210".to_string(),
            location: "Mumbai, India".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_map_record_uses_entry_ids() {
        let entries = map_record_to_entries(&sample_record(), &FormFieldMap::default());

        assert_eq!(entries.len(), 6);
        assert_eq!(
            entries[0],
            ("entry.1065878465".to_string(), "Asha Rao".to_string())
        );
        assert_eq!(
            entries[2],
            ("entry.2029084220".to_string(), "+91".to_string())
        );
        assert_eq!(
            entries[5],
            ("entry.181614183".to_string(), "Hello".to_string())
        );
    }

    #[test]
    fn test_map_record_respects_custom_field_map() {
        let fields = FormFieldMap {
            name: 1,
            email: 2,
            country_code: 3,
            phone: 4,
            location: 5,
            message: 6,
        };

        let entries = map_record_to_entries(&sample_record(), &fields);
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["entry.1", "entry.2", "entry.3", "entry.4", "entry.5", "entry.6"]
        );
    }
}
