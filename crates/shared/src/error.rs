use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    ParentName,
    Phone,
    ChildName,
    Age,
    Qty,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::ParentName => "parent name",
            RequiredField::Phone => "phone",
            RequiredField::ChildName => "child name",
            RequiredField::Age => "age",
            RequiredField::Qty => "quantity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<RequiredField>),
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
