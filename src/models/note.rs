/// A note as it lives at rest: an encryption token, or, after a crypto
/// fallback, the plaintext itself.
///
/// This is the only type the store reads or writes for the `note` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedNote(String);

impl EncryptedNote {
    pub fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
