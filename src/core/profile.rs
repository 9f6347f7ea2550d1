/// Editable company profile state
///
/// Four free-text fields share a single edit flag: entering edit mode exposes
/// every field as an input at once, and Save or Enter returns all of them to
/// display text. Nothing here is persisted; a fresh `Profile` always starts
/// from the placeholders.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::utils::{PLACEHOLDER_ABOUT, PLACEHOLDER_ADDRESS, PLACEHOLDER_HOURS, PLACEHOLDER_NAME};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown profile field '{0}' (expected name, about, hours or address)")]
    UnknownField(String),
}

/// One of the four editable text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    About,
    Hours,
    Address,
}

impl ProfileField {
    /// Display order, which is also the focus order while editing
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::About,
        ProfileField::Hours,
        ProfileField::Address,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::About => "about",
            ProfileField::Hours => "hours",
            ProfileField::Address => "address",
        }
    }

    /// Section heading shown above the field
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Company",
            ProfileField::About => "About Us",
            ProfileField::Hours => "Hours",
            ProfileField::Address => "Location",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ProfileField::Name => ProfileField::About,
            ProfileField::About => ProfileField::Hours,
            ProfileField::Hours => ProfileField::Address,
            ProfileField::Address => ProfileField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ProfileField::Name => ProfileField::Address,
            ProfileField::About => ProfileField::Name,
            ProfileField::Hours => ProfileField::About,
            ProfileField::Address => ProfileField::Hours,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProfileField::Name),
            "about" => Ok(ProfileField::About),
            "hours" => Ok(ProfileField::Hours),
            "address" => Ok(ProfileField::Address),
            _ => Err(ProfileError::UnknownField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    about: String,
    hours: String,
    address: String,
    mode: ViewMode,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            about: PLACEHOLDER_ABOUT.to_string(),
            hours: PLACEHOLDER_HOURS.to_string(),
            address: PLACEHOLDER_ADDRESS.to_string(),
            mode: ViewMode::Viewing,
        }
    }
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ViewMode::Editing
    }

    /// Edit affordance: every field becomes an input
    pub fn enter_edit_mode(&mut self) {
        self.mode = ViewMode::Editing;
    }

    /// Overwrite a field with the input's current contents, verbatim
    pub fn update_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::About => self.about = value,
            ProfileField::Hours => self.hours = value,
            ProfileField::Address => self.address = value,
        }
    }

    /// Save / Enter: back to display text for every field, values kept as typed
    pub fn commit_and_exit(&mut self) {
        self.mode = ViewMode::Viewing;
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::About => &self.about,
            ProfileField::Hours => &self.hours,
            ProfileField::Address => &self.address,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (ProfileField, &str)> + '_ {
        ProfileField::ALL.iter().map(move |field| (*field, self.value(*field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_viewing_with_placeholders() {
        let profile = Profile::new();
        assert_eq!(profile.mode(), ViewMode::Viewing);
        assert_eq!(profile.value(ProfileField::Name), PLACEHOLDER_NAME);
        assert_eq!(profile.value(ProfileField::About), PLACEHOLDER_ABOUT);
        assert_eq!(profile.value(ProfileField::Hours), PLACEHOLDER_HOURS);
        assert_eq!(profile.value(ProfileField::Address), PLACEHOLDER_ADDRESS);
    }

    #[test]
    fn test_edit_then_commit_keeps_value_verbatim() {
        for field in ProfileField::ALL {
            let mut profile = Profile::new();
            profile.enter_edit_mode();
            profile.update_field(field, "  Vet & Co.  ");
            profile.commit_and_exit();

            assert!(!profile.is_editing());
            assert_eq!(profile.value(field), "  Vet & Co.  ");
        }
    }

    #[test]
    fn test_empty_value_is_accepted() {
        let mut profile = Profile::new();
        profile.enter_edit_mode();
        profile.update_field(ProfileField::Hours, "");
        profile.commit_and_exit();
        assert_eq!(profile.value(ProfileField::Hours), "");
    }

    #[test]
    fn test_update_only_touches_its_field() {
        let mut profile = Profile::new();
        profile.enter_edit_mode();
        profile.update_field(ProfileField::About, "We treat cats");

        assert_eq!(profile.value(ProfileField::About), "We treat cats");
        assert_eq!(profile.value(ProfileField::Name), PLACEHOLDER_NAME);
        assert_eq!(profile.value(ProfileField::Hours), PLACEHOLDER_HOURS);
        assert_eq!(profile.value(ProfileField::Address), PLACEHOLDER_ADDRESS);
    }

    #[test]
    fn test_mode_cycles() {
        let mut profile = Profile::new();
        for _ in 0..3 {
            profile.enter_edit_mode();
            assert_eq!(profile.mode(), ViewMode::Editing);
            profile.commit_and_exit();
            assert_eq!(profile.mode(), ViewMode::Viewing);
        }
    }

    #[test]
    fn test_commit_while_viewing_is_harmless() {
        let mut profile = Profile::new();
        profile.commit_and_exit();
        assert_eq!(profile, Profile::new());
    }

    #[test]
    fn test_new_profile_discards_edits() {
        let mut profile = Profile::new();
        profile.enter_edit_mode();
        for field in ProfileField::ALL {
            profile.update_field(field, "changed");
        }
        profile.commit_and_exit();

        profile = Profile::new();
        for (field, value) in profile.fields() {
            assert_ne!(value, "changed", "{} kept an edit", field);
        }
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("name".parse::<ProfileField>(), Ok(ProfileField::Name));
        assert_eq!("About".parse::<ProfileField>(), Ok(ProfileField::About));
        assert_eq!(" hours ".parse::<ProfileField>(), Ok(ProfileField::Hours));
        assert_eq!("address".parse::<ProfileField>(), Ok(ProfileField::Address));
        assert_eq!(
            "phone".parse::<ProfileField>(),
            Err(ProfileError::UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(ProfileField::Address.next(), ProfileField::Name);
        assert_eq!(ProfileField::Name.prev(), ProfileField::Address);
        for field in ProfileField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }
}
