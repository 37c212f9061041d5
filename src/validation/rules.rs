//! Declarative product rule set shared by the client and server validators.

/// Minimum length of a product name, in characters.
pub const NAME_MIN_LEN: u64 = 2;

/// Minimum length of a product description, in characters.
pub const DESCRIPTION_MIN_LEN: u64 = 5;

/// Fields of the product form, in the order their errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    NameProduct,
    Description,
    Price,
    File,
}

impl Field {
    /// Name of the field on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Field::NameProduct => "nameProduct",
            Field::Description => "description",
            Field::Price => "price",
            Field::File => "file",
        }
    }
}

/// A single check applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The value must be present and non-empty.
    Required,
    /// Text must hold at least this many characters.
    MinLength(u64),
    /// The value must be a finite number.
    Numeric,
    /// The number must be strictly greater than zero.
    Positive,
    /// The value must be an actual file, not a text field.
    FileObject,
}

/// Constraints attached to one field, evaluated in order.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub constraints: &'static [Constraint],
}

pub const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::NameProduct,
        constraints: &[Constraint::Required, Constraint::MinLength(NAME_MIN_LEN)],
    },
    FieldRule {
        field: Field::Description,
        constraints: &[
            Constraint::Required,
            Constraint::MinLength(DESCRIPTION_MIN_LEN),
        ],
    },
    FieldRule {
        field: Field::Price,
        constraints: &[
            Constraint::Required,
            Constraint::Numeric,
            Constraint::Positive,
        ],
    },
    FieldRule {
        field: Field::File,
        constraints: &[Constraint::Required, Constraint::FileObject],
    },
];

pub const PRICE_NOT_A_NUMBER: &str = "El precio debe ser un número";
pub const FILE_REQUIRED: &str = "La imagen es obligatoria";
pub const FILE_INVALID_UPLOAD: &str = "Debes subir un archivo válido";
pub const FILE_INVALID_SELECTION: &str = "Debes seleccionar un archivo válido";

/// Look up the rule for `field`.
pub fn rule_for(field: Field) -> Option<&'static FieldRule> {
    PRODUCT_RULES.iter().find(|rule| rule.field == field)
}
