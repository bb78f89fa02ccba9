use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::logic::decode::{coerce, non_blank, FieldSpec, RequestShape};
use crate::model::{Id, Required};

/// Stored department record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: Id,
    pub name: String,
}

impl Department {
    pub fn new(id: Id, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
        }
    }
}

/// Body of `POST /departments` and `POST /departments/{id}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentRequest {
    pub name: Required<Option<String>>,
}

fn assign_name(req: &mut DepartmentRequest, value: &Value) -> std::result::Result<(), String> {
    req.name = Required::of(coerce::string(value)?);
    Ok(())
}

impl RequestShape for DepartmentRequest {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec {
        name: "name",
        assign: assign_name,
        present: |req| req.name.is_present(),
    }];
}

impl DepartmentRequest {
    pub fn with_name(name: &str) -> Self {
        Self {
            name: Required::of(Some(name.to_string())),
        }
    }

    /// Extract the department name once presence has been validated.
    pub fn into_name(self) -> Result<String> {
        non_blank("name", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentResponse {
    pub id: Id,
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
        }
    }
}
