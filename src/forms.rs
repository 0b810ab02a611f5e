//! Typed form records and their validators.
//!
//! Each form is a fixed record plus a companion `validate` returning a
//! field→message map; submission is blocked client-side while the map is
//! non-empty.

use std::collections::BTreeMap;

use crate::catalog::Package;

pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Matches `^\S+@\S+\.\S+$`: something before the `@`, and a domain part
/// with a dot that has visible characters on both sides.
pub fn is_valid_email(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct ContactForm {
    pub title: String,
    pub first: String,
    pub last: String,
    pub email: String,
    pub project: String,
    pub budget: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            title: "Mr".to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.first.is_empty() {
            errors.insert("first", "Required");
        }
        if self.last.is_empty() {
            errors.insert("last", "Required");
        }
        if !is_valid_email(&self.email) {
            errors.insert("email", "Enter a valid email");
        }
        if self.project.is_empty() {
            errors.insert("project", "Required");
        }
        if self.budget.is_empty() {
            errors.insert("budget", "Required");
        }
        errors
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("form-name", "contact".to_string()),
            // honeypot: always submitted empty, only bots fill it
            ("bot-field", String::new()),
            ("title", self.title.clone()),
            ("first", self.first.clone()),
            ("last", self.last.clone()),
            ("email", self.email.clone()),
            ("project", self.project.clone()),
            ("budget", self.budget.clone()),
            ("message", self.message.clone()),
        ]
    }
}

/// The project brief collected before payment.
#[derive(Clone, PartialEq, Default)]
pub struct BriefForm {
    pub company: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub pages: String,
    pub goal: String,
    pub assets_note: String,
    pub seo: String,
    pub integrations: String,
    pub ecommerce: String,
    pub crm: String,
    pub references: String,
    pub competitors: String,
    pub notes: String,
}

impl BriefForm {
    /// `files_attached` is the number of asset files currently selected;
    /// asset information may come as a note or as at least one file.
    pub fn validate(&self, files_attached: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.company.is_empty() {
            errors.insert("company", "Required");
        }
        if self.contact.is_empty() {
            errors.insert("contact", "Required");
        }
        if !is_valid_email(&self.email) {
            errors.insert("email", "Enter a valid email");
        }
        if self.phone.is_empty() {
            errors.insert("phone", "Required");
        }
        if self.pages.is_empty() {
            errors.insert("pages", "Required");
        }
        if self.goal.is_empty() {
            errors.insert("goal", "Required");
        }
        if self.assets_note.is_empty() && files_attached == 0 {
            errors.insert(
                "assets_note",
                "Provide a note or upload at least one asset file",
            );
        }
        errors
    }

    /// Field pairs for the multipart brief submission. The computed total is
    /// included for record-keeping only; the endpoint never echoes it back.
    pub fn fields(&self, pkg: &Package, rush: bool) -> Vec<(&'static str, String)> {
        vec![
            ("form-name", format!("brief-{}", pkg.slug)),
            ("bot-field", String::new()),
            ("package", pkg.name.to_string()),
            ("rush", if rush { "Yes" } else { "No" }.to_string()),
            ("total", format!("${}", pkg.total(rush))),
            ("company", self.company.clone()),
            ("contact", self.contact.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("pages", self.pages.clone()),
            ("goal", self.goal.clone()),
            ("assetsNote", self.assets_note.clone()),
            ("seo", self.seo.clone()),
            ("integrations", self.integrations.clone()),
            ("ecommerce", self.ecommerce.clone()),
            ("crm", self.crm.clone()),
            ("references", self.references.clone()),
            ("competitors", self.competitors.clone()),
            ("notes", self.notes.clone()),
        ]
    }
}

/// Encode pairs as an `application/x-www-form-urlencoded` body.
pub fn encode_form_data(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.net"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn empty_brief_reports_one_error_per_required_field() {
        let errors = BriefForm::default().validate(0);
        let expected = [
            "company",
            "contact",
            "email",
            "phone",
            "pages",
            "goal",
            "assets_note",
        ];
        assert_eq!(errors.len(), expected.len());
        for field in expected {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    fn filled_brief() -> BriefForm {
        BriefForm {
            company: "Vigor Lab".into(),
            contact: "Jo Doe".into(),
            email: "jo@vigorlab.com".into(),
            phone: "+47 123 45 678".into(),
            pages: "6".into(),
            goal: "More program signups".into(),
            assets_note: "Logo pack attached".into(),
            ..Default::default()
        }
    }

    #[test]
    fn invalid_email_is_the_only_error_on_an_otherwise_valid_brief() {
        let mut form = filled_brief();
        form.email = "abc".into();
        let errors = form.validate(0);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(&"Enter a valid email"));
    }

    #[test]
    fn assets_accept_a_note_or_a_file() {
        let mut form = filled_brief();
        form.assets_note.clear();
        assert!(form.validate(0).contains_key("assets_note"));
        assert!(form.validate(1).is_empty());
        form.assets_note = "brand PDF coming".into();
        assert!(form.validate(0).is_empty());
    }

    #[test]
    fn brief_fields_carry_package_rush_and_total() {
        let pkg = catalog::lookup("growth").unwrap();
        let fields = filled_brief().fields(pkg, true);
        let get = |k: &str| {
            fields
                .iter()
                .find(|(key, _)| *key == k)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("form-name"), "brief-growth");
        assert_eq!(get("bot-field"), "");
        assert_eq!(get("package"), "Growth");
        assert_eq!(get("rush"), "Yes");
        assert_eq!(get("total"), "$2700");
    }

    #[test]
    fn contact_validation_and_encoding() {
        let mut form = ContactForm::new();
        let errors = form.validate();
        assert_eq!(errors.len(), 5);

        form.first = "Ada".into();
        form.last = "Byron".into();
        form.email = "ada@lovelace.org".into();
        form.project = "Portfolio".into();
        form.budget = "$1,000 – $2,500".into();
        assert!(form.validate().is_empty());

        let body = encode_form_data(&form.fields());
        assert!(body.starts_with("form-name=contact&bot-field=&title=Mr&first=Ada"));
        assert!(body.contains("email=ada%40lovelace.org"));
        assert!(body.contains("budget=%241%2C000%20%E2%80%93%20%242%2C500"));
    }
}
