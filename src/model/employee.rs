use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::logic::decode::{coerce, non_blank, non_null, FieldSpec, RequestShape};
use crate::model::{Department, DepartmentResponse, Id, Required};

/// Stored employee record.
///
/// `department` is only ever populated on snapshots handed out by the store when the
/// caller asked for the department to be expanded; stored records keep it `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Id,
    pub department_id: Id,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub date_of_death: Option<DateTime<Utc>>,
    pub department: Option<Department>,
}

/// Input model for creating or replacing an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub department_id: Id,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub date_of_death: Option<DateTime<Utc>>,
}

impl NewEmployee {
    /// Convert to a stored record with the given id; names are trimmed.
    pub fn into_employee(self, id: Id) -> Employee {
        Employee {
            id,
            department_id: self.department_id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
            department: None,
        }
    }
}

impl Employee {
    /// Replace every mutable field in place, keeping the id.
    pub fn apply(&mut self, fields: NewEmployee) {
        self.department_id = fields.department_id;
        self.first_name = fields.first_name.trim().to_string();
        self.last_name = fields.last_name.trim().to_string();
        self.date_of_birth = fields.date_of_birth;
        self.date_of_death = fields.date_of_death;
    }
}

/// Body of `POST /employees` and `POST /employees/{id}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeRequest {
    pub department_id: Required<Option<Id>>,
    pub first_name: Required<Option<String>>,
    pub last_name: Required<Option<String>>,
    pub date_of_birth: Required<Option<DateTime<Utc>>>,
    pub date_of_death: Required<Option<DateTime<Utc>>>,
}

type AssignResult = std::result::Result<(), String>;

fn assign_department_id(req: &mut EmployeeRequest, value: &Value) -> AssignResult {
    req.department_id = Required::of(coerce::integer(value)?);
    Ok(())
}

fn assign_first_name(req: &mut EmployeeRequest, value: &Value) -> AssignResult {
    req.first_name = Required::of(coerce::string(value)?);
    Ok(())
}

fn assign_last_name(req: &mut EmployeeRequest, value: &Value) -> AssignResult {
    req.last_name = Required::of(coerce::string(value)?);
    Ok(())
}

fn assign_date_of_birth(req: &mut EmployeeRequest, value: &Value) -> AssignResult {
    req.date_of_birth = Required::of(coerce::instant(value)?);
    Ok(())
}

fn assign_date_of_death(req: &mut EmployeeRequest, value: &Value) -> AssignResult {
    req.date_of_death = Required::of(coerce::instant(value)?);
    Ok(())
}

impl RequestShape for EmployeeRequest {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            name: "departmentId",
            assign: assign_department_id,
            present: |req| req.department_id.is_present(),
        },
        FieldSpec {
            name: "firstName",
            assign: assign_first_name,
            present: |req| req.first_name.is_present(),
        },
        FieldSpec {
            name: "lastName",
            assign: assign_last_name,
            present: |req| req.last_name.is_present(),
        },
        FieldSpec {
            name: "dateOfBirth",
            assign: assign_date_of_birth,
            present: |req| req.date_of_birth.is_present(),
        },
        FieldSpec {
            name: "dateOfDeath",
            assign: assign_date_of_death,
            present: |req| req.date_of_death.is_present(),
        },
    ];
}

impl EmployeeRequest {
    /// Build repository input once presence has been validated.
    ///
    /// Reading a field the validator let through as absent faults with `InvalidState`,
    /// which surfaces as a server error rather than a silently defaulted value.
    pub fn into_new_employee(self) -> Result<NewEmployee> {
        Ok(NewEmployee {
            department_id: non_null("departmentId", self.department_id)?,
            first_name: non_blank("firstName", self.first_name)?,
            last_name: non_blank("lastName", self.last_name)?,
            date_of_birth: non_null("dateOfBirth", self.date_of_birth)?,
            date_of_death: self.date_of_death.value_or(None),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Id,
    pub department_id: Id,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentResponse>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            department_id: employee.department_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            date_of_birth: employee.date_of_birth,
            date_of_death: employee.date_of_death,
            department: employee.department.map(DepartmentResponse::from),
        }
    }
}
