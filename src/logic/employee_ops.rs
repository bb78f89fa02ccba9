use crate::error::Result;
use crate::logic::Validator;
use crate::model::{EmployeeRequest, EmployeeResponse, Id};
use crate::store::EmployeeStore;

/// Employee use cases: presence validation, then the store, then response mapping.
pub struct EmployeeOperations;

impl EmployeeOperations {
    pub fn list<S: EmployeeStore>(
        store: &S,
        include_department: bool,
    ) -> Result<Vec<EmployeeResponse>> {
        Ok(store
            .list_employees(include_department)?
            .into_iter()
            .map(EmployeeResponse::from)
            .collect())
    }

    pub fn list_for_department<S: EmployeeStore>(
        store: &S,
        department_id: Id,
        include_department: bool,
    ) -> Result<Vec<EmployeeResponse>> {
        Ok(store
            .list_employees_by_department(department_id, include_department)?
            .into_iter()
            .map(EmployeeResponse::from)
            .collect())
    }

    pub fn get<S: EmployeeStore>(
        store: &S,
        id: Id,
        include_department: bool,
    ) -> Result<EmployeeResponse> {
        store
            .get_employee(id, include_department)
            .map(EmployeeResponse::from)
    }

    pub fn create<S: EmployeeStore>(
        store: &S,
        validator: &Validator,
        request: EmployeeRequest,
    ) -> Result<EmployeeResponse> {
        validator.validate_create_employee(&request)?;
        let employee = request.into_new_employee()?;
        store.create_employee(employee).map(EmployeeResponse::from)
    }

    pub fn update<S: EmployeeStore>(
        store: &S,
        validator: &Validator,
        id: Id,
        request: EmployeeRequest,
    ) -> Result<EmployeeResponse> {
        validator.validate_update_employee(&request)?;
        let employee = request.into_new_employee()?;
        store.update_employee(id, employee).map(EmployeeResponse::from)
    }

    pub fn delete<S: EmployeeStore>(store: &S, id: Id) -> Result<()> {
        store.delete_employee(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use crate::error::RosterError;
    use crate::logic::{decode, RequiredFieldTable};
    use crate::store::{DepartmentStore, MemoryStore};

    fn store_with_music() -> MemoryStore {
        let store = MemoryStore::new();
        store.create_department("Music").unwrap();
        store
    }

    #[test]
    fn test_create_always_expands_department() {
        let store = store_with_music();
        let request = decode(
            br#"{"departmentId": 1, "firstName": "Johnny", "lastName": "Cash", "dateOfBirth": "1932-02-26"}"#,
        )
        .unwrap();

        let created = EmployeeOperations::create(&store, &Validator::default(), request).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.department.as_ref().map(|d| d.name.as_str()), Some("Music"));
        assert_eq!(created.date_of_death, None);

        let fetched = EmployeeOperations::get(&store, created.id, false).unwrap();
        assert!(fetched.department.is_none());
    }

    #[test]
    fn test_update_replaces_every_mutable_field() {
        let store = store_with_music();
        let validator = Validator::default();
        let created = EmployeeOperations::create(
            &store,
            &validator,
            decode(br#"{"departmentId": 1, "firstName": "John", "lastName": "Lennon", "dateOfBirth": "1940-10-09", "dateOfDeath": "1980-12-08"}"#).unwrap(),
        )
        .unwrap();
        assert!(created.date_of_death.is_some());

        let updated = EmployeeOperations::update(
            &store,
            &validator,
            created.id,
            decode(br#"{"departmentId": 1, "firstName": "John", "lastName": "Lennon", "dateOfBirth": "1940-10-09"}"#).unwrap(),
        )
        .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date_of_death, None);
    }

    #[test]
    fn test_absent_last_name_faults_when_rule_is_disabled() {
        let store = store_with_music();
        let relaxed = Validator::new(RequiredFieldTable::from_config(&ValidationConfig {
            require_last_name: false,
        }));
        let request: EmployeeRequest =
            decode(br#"{"departmentId": 1, "firstName": "Cher", "dateOfBirth": "1946-05-20"}"#)
                .unwrap();

        let err = EmployeeOperations::create(&store, &relaxed, request).unwrap_err();
        assert!(matches!(err, RosterError::InvalidState(_)));
        assert!(EmployeeOperations::list(&store, false).unwrap().is_empty());
    }

    #[test]
    fn test_missing_department_reference_is_rejected() {
        let store = store_with_music();
        let request = decode(
            br#"{"departmentId": 2, "firstName": "Tom", "lastName": "Hanks", "dateOfBirth": "1956-07-09"}"#,
        )
        .unwrap();
        let err = EmployeeOperations::create(&store, &Validator::default(), request).unwrap_err();
        assert!(matches!(err, RosterError::Conflict(_)));

        assert!(matches!(
            EmployeeOperations::list_for_department(&store, 2, false),
            Err(RosterError::NotFound(_))
        ));
    }
}
