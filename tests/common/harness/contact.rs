//! Builder for test contacts with sensible defaults.

use rolo::domain::{Address, Birthday, Email, Name, Note, Phone, Record};

/// Builder for contacts seeded straight into a test data directory.
///
/// Values are validated when the record is built, so a typo in a test
/// fails loudly instead of producing a silently different contact.
#[derive(Debug, Clone)]
pub struct TestContact {
    name: String,
    phones: Vec<String>,
    emails: Vec<String>,
    birthday: Option<String>,
    address: Option<[String; 4]>,
    notes: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TestContact {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
            address: None,
            notes: Vec::new(),
        }
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phones.push(phone.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.emails.push(email.to_string());
        self
    }

    pub fn birthday(mut self, birthday: &str) -> Self {
        self.birthday = Some(birthday.to_string());
        self
    }

    pub fn address(mut self, street: &str, city: &str, postal_code: &str, country: &str) -> Self {
        self.address = Some([street, city, postal_code, country].map(str::to_string));
        self
    }

    pub fn note(mut self, title: &str, content: &str) -> Self {
        self.notes.push((title.to_string(), content.to_string()));
        self
    }

    /// Builds the domain record, panicking on invalid test data.
    pub fn to_record(&self) -> Record {
        let birthday = self
            .birthday
            .as_deref()
            .map(|b| Birthday::new(b).expect("invalid test birthday"));
        Record::builder(Name::new(&self.name).expect("invalid test name"))
            .birthday(birthday)
            .phones(
                self.phones
                    .iter()
                    .map(|p| Phone::new(p).expect("invalid test phone")),
            )
            .emails(
                self.emails
                    .iter()
                    .map(|e| Email::new(e).expect("invalid test email")),
            )
            .address(
                self.address
                    .as_ref()
                    .map(|[s, c, p, k]| Address::new(s, c, p, k)),
            )
            .notes(self.notes.iter().map(|(t, c)| Note::new(t, c)))
            .build()
    }
}
