//! Controlled form state for a game record.
//!
//! Values are always present as strings. Touched and error tracking is
//! per field; the page ships no validation rules, but a validator can be
//! attached with [`FormState::with_validator`].

use std::collections::{BTreeMap, BTreeSet};

use crate::record::GameFields;

/// One editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Nome,
    Descricao,
    GeneroId,
    Foto,
    Cover,
}

/// Fields in display order.
pub const FIELDS: [Field; 5] = [
    Field::Nome,
    Field::Descricao,
    Field::GeneroId,
    Field::Foto,
    Field::Cover,
];

impl Field {
    /// JSON / input name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Descricao => "descricao",
            Field::GeneroId => "generoId",
            Field::Foto => "foto",
            Field::Cover => "cover",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Nome => "Nome:",
            Field::Descricao => "Descrição:",
            Field::GeneroId => "GeneroId:",
            Field::Foto => "Foto:",
            Field::Cover => "Cover:",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Foto => Some("Url da Foto"),
            Field::Cover => Some("Url da Capa"),
            _ => None,
        }
    }

    /// Number of textarea rows, or `None` for a single-line input.
    pub fn rows(self) -> Option<u32> {
        match self {
            Field::Descricao => Some(4),
            _ => None,
        }
    }

    pub fn get(self, fields: &GameFields) -> &str {
        match self {
            Field::Nome => &fields.nome,
            Field::Descricao => &fields.descricao,
            Field::GeneroId => &fields.genero_id,
            Field::Foto => &fields.foto,
            Field::Cover => &fields.cover,
        }
    }

    fn slot(self, fields: &mut GameFields) -> &mut String {
        match self {
            Field::Nome => &mut fields.nome,
            Field::Descricao => &mut fields.descricao,
            Field::GeneroId => &mut fields.genero_id,
            Field::Foto => &mut fields.foto,
            Field::Cover => &mut fields.cover,
        }
    }
}

/// Per-field error messages.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validation hook run on submit.
pub type Validator = fn(&GameFields) -> FieldErrors;

fn accept_all(_: &GameFields) -> FieldErrors {
    FieldErrors::new()
}

#[derive(Debug, Clone)]
pub struct FormState {
    values: GameFields,
    initial: GameFields,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    validator: Validator,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(GameFields::default())
    }
}

impl FormState {
    pub fn new(initial: GameFields) -> Self {
        Self {
            values: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            validator: accept_all,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Replace the values wholesale and forget touched/error state.
    ///
    /// Called every time the externally loaded record changes, since the
    /// load completes after the first render.
    pub fn reinitialize(&mut self, initial: GameFields) {
        self.values = initial.clone();
        self.initial = initial;
        self.touched.clear();
        self.errors.clear();
    }

    pub fn values(&self) -> &GameFields {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        field.get(&self.values)
    }

    /// Update exactly one field.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *field.slot(&mut self.values) = value.into();
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn set_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the field should render its invalid feedback.
    pub fn is_invalid(&self, field: Field) -> bool {
        self.is_touched(field) && self.errors.contains_key(&field)
    }

    /// Values differ from the last (re)initialisation.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Mark every field touched, validate, and hand back the values.
    pub fn submit(&mut self) -> Result<GameFields, FieldErrors> {
        self.touched.extend(FIELDS);
        self.errors = (self.validator)(&self.values);
        if self.errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameFields {
        GameFields {
            nome: "Chess".into(),
            descricao: "d".into(),
            foto: "f.png".into(),
            cover: "c.png".into(),
            genero_id: "3".into(),
        }
    }

    #[test]
    fn changing_one_field_leaves_the_others() {
        let mut form = FormState::new(sample());
        form.set_value(Field::Nome, "Go");
        let v = form.values();
        assert_eq!(v.nome, "Go");
        assert_eq!(v.descricao, "d");
        assert_eq!(v.foto, "f.png");
        assert_eq!(v.cover, "c.png");
        assert_eq!(v.genero_id, "3");
        assert!(form.is_dirty());
    }

    #[test]
    fn reinitialize_replaces_values_and_clears_status() {
        let mut form = FormState::default();
        form.set_value(Field::Foto, "x");
        form.touch(Field::Foto);
        form.set_error(Field::Foto, "bad");

        form.reinitialize(sample());
        assert_eq!(form.values(), &sample());
        assert!(!form.is_touched(Field::Foto));
        assert_eq!(form.error(Field::Foto), None);
        assert!(!form.is_dirty());
    }

    #[test]
    fn invalid_needs_touched_and_error() {
        let mut form = FormState::default();
        form.set_error(Field::Nome, "obrigatório");
        assert!(!form.is_invalid(Field::Nome));
        form.touch(Field::Nome);
        assert!(form.is_invalid(Field::Nome));
        form.clear_error(Field::Nome);
        assert!(!form.is_invalid(Field::Nome));
    }

    #[test]
    fn submit_without_rules_returns_values() {
        let mut form = FormState::new(sample());
        assert_eq!(form.submit(), Ok(sample()));
        assert!(FIELDS.iter().all(|f| form.is_touched(*f)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn submit_with_validator_reports_errors() {
        fn require_nome(fields: &GameFields) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if fields.nome.trim().is_empty() {
                errors.insert(Field::Nome, "Nome é obrigatório".into());
            }
            errors
        }

        let mut form = FormState::default().with_validator(require_nome);
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(form.is_invalid(Field::Nome));
        assert!(!form.is_invalid(Field::Cover));

        form.set_value(Field::Nome, "Chess");
        assert!(form.submit().is_ok());
        assert!(!form.is_invalid(Field::Nome));
    }

    #[test]
    fn field_metadata() {
        assert_eq!(Field::GeneroId.name(), "generoId");
        assert_eq!(Field::Descricao.rows(), Some(4));
        assert_eq!(Field::Nome.rows(), None);
        assert_eq!(Field::Cover.placeholder(), Some("Url da Capa"));
        assert_eq!(Field::Nome.placeholder(), None);
    }
}
