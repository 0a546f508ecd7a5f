use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum FieldName {
    Name,
    Phone,
    Email,
    Message,
    Consent,
}

impl FieldName {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Name => FieldKind::Text,
            FieldName::Phone => FieldKind::Tel,
            FieldName::Email => FieldKind::Email,
            FieldName::Message => FieldKind::TextArea,
            FieldName::Consent => FieldKind::Checkbox,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tel,
    Email,
    TextArea,
    Checkbox,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Pristine,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }
}

#[derive(Clone, Debug)]
pub struct Field {
    pub name: FieldName,
    pub required: bool,
    pub value: String,
    pub checked: bool,
    pub state: FieldState,
}

impl Field {
    fn new(name: FieldName) -> Self {
        Self {
            name,
            required: name != FieldName::Consent,
            value: String::new(),
            checked: false,
            state: FieldState::Pristine,
        }
    }
}

/// Values and validation state of the contact form controls.
#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: Vec<Field>,
    pub was_validated: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: FieldName::VARIANTS.iter().copied().map(Field::new).collect(),
            was_validated: false,
        }
    }
}

impl ContactForm {
    // Fields are stored in `FieldName::VARIANTS` order.
    pub fn field(&self, name: FieldName) -> &Field {
        &self.fields[name as usize]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut Field {
        &mut self.fields[name as usize]
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn value(&self, name: FieldName) -> &str {
        &self.field(name).value
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trimmed text values in form order, plus `consent=on` when checked.
    pub fn serialize(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|field| match field.name.kind() {
                FieldKind::Checkbox => field
                    .checked
                    .then(|| (field.name.to_string(), "on".to_owned())),
                _ => Some((field.name.to_string(), field.value.trim().to_owned())),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_form_controls() {
        assert_eq!(FieldName::Name.as_ref(), "name");
        assert_eq!(FieldName::Consent.to_string(), "consent");
        assert_eq!("phone".parse::<FieldName>().unwrap(), FieldName::Phone);
    }

    #[test]
    fn test_serialize_trims_and_skips_unchecked_consent() {
        let mut form = ContactForm::default();
        form.field_mut(FieldName::Name).value = "  Ivan ".to_owned();
        form.field_mut(FieldName::Message).value = "Hello\n".to_owned();

        let fields = form.serialize();
        assert_eq!(fields[0], ("name".to_owned(), "Ivan".to_owned()));
        assert_eq!(fields[3], ("message".to_owned(), "Hello".to_owned()));
        assert_eq!(fields.len(), 4);

        form.field_mut(FieldName::Consent).checked = true;
        assert_eq!(
            form.serialize().last(),
            Some(&("consent".to_owned(), "on".to_owned()))
        );
    }

    #[test]
    fn test_reset_clears_values_and_state() {
        let mut form = ContactForm::default();
        form.field_mut(FieldName::Email).value = "a@b.com".to_owned();
        form.field_mut(FieldName::Email).state = FieldState::Valid;
        form.was_validated = true;

        form.reset();

        assert_eq!(form.value(FieldName::Email), "");
        assert_eq!(form.field(FieldName::Email).state, FieldState::Pristine);
        assert!(!form.was_validated);
    }
}
