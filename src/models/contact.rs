use regex::Regex;
use serde::{Deserialize, Serialize};

/// Contact / collaboration record collected by the footer form.
/// Field names serialize in camelCase, matching what the collection
/// endpoints expect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    /// Dialing prefix, e.g. "+91"
    pub country_code: String,
    pub phone: String,
    /// Free-form "City, Country"
    pub location: String,
    pub message: String,
}

impl ContactRecord {
    /// Check the fields the form marks required, before any network call.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("countryCode", &self.country_code),
            ("phone", &self.phone),
            ("location", &self.location),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required", field));
            }
        }

        let email_re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_err(|e| e.to_string())?;
        if !email_re.is_match(self.email.trim()) {
            return Err(format!("invalid email address: {}", self.email));
        }

        let phone_re = Regex::new(r"^[0-9 ()+-]{5,20}$").map_err(|e| e.to_string())?;
        if !phone_re.is_match(self.phone.trim()) {
            return Err(format!("invalid phone number: {}", self.phone));
        }

        Ok(())
    }
}
