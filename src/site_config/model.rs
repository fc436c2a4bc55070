//! Remote site configuration document.
//!
//! Every field is required when decoding: a document missing a group is
//! malformed and rejected as a whole, it is never merged with the default.

use serde::{Deserialize, Serialize};

/// Contact details, theme colors and meta copy for the whole site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub meta: MetaConfig,
    pub contact: ContactConfig,
    pub colors: ColorConfig,
}

/// Document title and search metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetaConfig {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// Clinic contact details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactConfig {
    pub address: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    /// WhatsApp number in any human format (`+90 532 000 00 00`).
    pub whatsapp: String,
}

/// Theme colors: hex values (`#0f766e`) or CSS tokens (`rgb(...)`, `teal`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorConfig {
    pub primary: String,
    pub accent: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            title: "Klinik".to_string(),
            description: "Uzman ve güvenilir sağlık hizmeti.".to_string(),
            keywords: "klinik, doktor, randevu".to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            address: "İstanbul, Türkiye".to_string(),
            phone: "+90 212 000 00 00".to_string(),
            mobile: "+90 532 000 00 00".to_string(),
            email: "info@example.com".to_string(),
            whatsapp: "+90 532 000 00 00".to_string(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#0f766e".to_string(),
            accent: "#f59e0b".to_string(),
        }
    }
}

impl ContactConfig {
    /// `https://wa.me/<digits>` chat link, if the number has any digits.
    pub fn whatsapp_link(&self) -> Option<String> {
        let digits = digits_only(&self.whatsapp);
        if digits.is_empty() {
            None
        } else {
            Some(format!("https://wa.me/{digits}"))
        }
    }

    /// `tel:` link for the landline.
    pub fn phone_href(&self) -> Option<String> {
        tel_href(&self.phone)
    }

    /// `tel:` link for the mobile number.
    pub fn mobile_href(&self) -> Option<String> {
        tel_href(&self.mobile)
    }
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn tel_href(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return None;
    }
    let plus = if raw.trim_start().starts_with('+') { "+" } else { "" };
    Some(format!("tel:{plus}{digits}"))
}
