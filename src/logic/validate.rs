use crate::config::ValidationConfig;
use crate::error::{Result, RosterError};
use crate::logic::decode::RequestShape;
use crate::model::{DepartmentRequest, EmployeeRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOperation {
    CreateDepartment,
    UpdateDepartment,
    CreateEmployee,
    UpdateEmployee,
}

/// A single required-field rule: `field` must be present for `operation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField {
    pub rule: &'static str,
    pub operation: WriteOperation,
    pub field: &'static str,
    pub message: &'static str,
}

/// Name of the configurable rule requiring `lastName` on employee writes.
pub const LAST_NAME_REQUIRED: &str = "last-name-required";

const DEPARTMENT_WRITES: [WriteOperation; 2] =
    [WriteOperation::CreateDepartment, WriteOperation::UpdateDepartment];

const EMPLOYEE_WRITES: [WriteOperation; 2] =
    [WriteOperation::CreateEmployee, WriteOperation::UpdateEmployee];

/// Enumerable table of required fields per write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldTable {
    entries: Vec<RequiredField>,
}

impl RequiredFieldTable {
    /// The full table with every rule enforced.
    pub fn standard() -> Self {
        let mut entries = Vec::new();

        for operation in DEPARTMENT_WRITES {
            entries.push(RequiredField {
                rule: "department-name-required",
                operation,
                field: "name",
                message: "Name is required.",
            });
        }

        for operation in EMPLOYEE_WRITES {
            entries.extend([
                RequiredField {
                    rule: "department-id-required",
                    operation,
                    field: "departmentId",
                    message: "Department ID is required.",
                },
                RequiredField {
                    rule: "first-name-required",
                    operation,
                    field: "firstName",
                    message: "First Name is required.",
                },
                RequiredField {
                    rule: LAST_NAME_REQUIRED,
                    operation,
                    field: "lastName",
                    message: "Last Name is required.",
                },
                RequiredField {
                    rule: "date-of-birth-required",
                    operation,
                    field: "dateOfBirth",
                    message: "Date of Birth is required.",
                },
            ]);
        }

        Self { entries }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        let table = Self::standard();
        if config.require_last_name {
            table
        } else {
            table.without_rule(LAST_NAME_REQUIRED)
        }
    }

    /// Drop every entry belonging to the named rule.
    pub fn without_rule(mut self, rule: &str) -> Self {
        self.entries.retain(|entry| entry.rule != rule);
        self
    }

    pub fn entries(&self) -> &[RequiredField] {
        &self.entries
    }

    pub fn required_for(&self, operation: WriteOperation) -> impl Iterator<Item = &RequiredField> {
        self.entries
            .iter()
            .filter(move |entry| entry.operation == operation)
    }
}

impl Default for RequiredFieldTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Presence checks for decoded write requests.
///
/// Only presence is checked here; uniqueness and referential integrity belong to the store.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    table: RequiredFieldTable,
}

impl Validator {
    pub fn new(table: RequiredFieldTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RequiredFieldTable {
        &self.table
    }

    pub fn validate_create_department(&self, request: &DepartmentRequest) -> Result<()> {
        self.check(WriteOperation::CreateDepartment, request)
    }

    pub fn validate_update_department(&self, request: &DepartmentRequest) -> Result<()> {
        self.check(WriteOperation::UpdateDepartment, request)
    }

    pub fn validate_create_employee(&self, request: &EmployeeRequest) -> Result<()> {
        self.check(WriteOperation::CreateEmployee, request)
    }

    pub fn validate_update_employee(&self, request: &EmployeeRequest) -> Result<()> {
        self.check(WriteOperation::UpdateEmployee, request)
    }

    fn check<R: RequestShape>(&self, operation: WriteOperation, request: &R) -> Result<()> {
        let messages: Vec<String> = self
            .table
            .required_for(operation)
            .filter(|entry| !request.is_present(entry.field))
            .map(|entry| entry.message.to_string())
            .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            log::warn!("{:?} rejected: {}", operation, messages.join(" "));
            Err(RosterError::ValidationFailed(messages))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::decode::decode;

    fn messages(result: Result<()>) -> Vec<String> {
        match result {
            Err(RosterError::ValidationFailed(messages)) => messages,
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_every_table_field_is_declared_by_its_request_shape() {
        for entry in RequiredFieldTable::standard().entries() {
            let declared = match entry.operation {
                WriteOperation::CreateDepartment | WriteOperation::UpdateDepartment => {
                    DepartmentRequest::field(entry.field).is_some()
                }
                WriteOperation::CreateEmployee | WriteOperation::UpdateEmployee => {
                    EmployeeRequest::field(entry.field).is_some()
                }
            };
            assert!(declared, "rule '{}' names undeclared field '{}'", entry.rule, entry.field);
        }
    }

    #[test]
    fn test_department_name_required() {
        let validator = Validator::default();
        let request: DepartmentRequest = decode(b"{}").unwrap();
        assert_eq!(
            messages(validator.validate_create_department(&request)),
            vec!["Name is required."]
        );
        assert_eq!(
            messages(validator.validate_update_department(&request)),
            vec!["Name is required."]
        );

        // An explicit null still counts as supplied.
        let request: DepartmentRequest = decode(br#"{"name": null}"#).unwrap();
        assert!(validator.validate_create_department(&request).is_ok());
    }

    #[test]
    fn test_employee_messages_accumulate() {
        let validator = Validator::default();
        let request: EmployeeRequest = decode(br#"{"dateOfDeath": "2000-01-01"}"#).unwrap();
        assert_eq!(
            messages(validator.validate_create_employee(&request)),
            vec![
                "Department ID is required.",
                "First Name is required.",
                "Last Name is required.",
                "Date of Birth is required.",
            ]
        );
    }

    #[test]
    fn test_date_of_death_is_optional() {
        let validator = Validator::default();
        let request: EmployeeRequest = decode(
            br#"{"departmentId": 1, "firstName": "Tom", "lastName": "Hanks", "dateOfBirth": "1956-07-09"}"#,
        )
        .unwrap();
        assert!(validator.validate_create_employee(&request).is_ok());
        assert!(validator.validate_update_employee(&request).is_ok());
    }

    #[test]
    fn test_last_name_rule_is_configurable() {
        let relaxed = Validator::new(RequiredFieldTable::from_config(&ValidationConfig {
            require_last_name: false,
        }));
        let request: EmployeeRequest =
            decode(br#"{"departmentId": 1, "firstName": "Cher", "dateOfBirth": "1946-05-20"}"#)
                .unwrap();
        assert!(relaxed.validate_create_employee(&request).is_ok());
        assert!(relaxed
            .table()
            .entries()
            .iter()
            .all(|entry| entry.rule != LAST_NAME_REQUIRED));

        let strict = Validator::new(RequiredFieldTable::from_config(&ValidationConfig {
            require_last_name: true,
        }));
        assert_eq!(
            messages(strict.validate_create_employee(&request)),
            vec!["Last Name is required."]
        );
    }
}
