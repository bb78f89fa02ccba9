use crate::error::Result;
use crate::logic::Validator;
use crate::model::{DepartmentRequest, DepartmentResponse, Id};
use crate::store::DepartmentStore;

/// Department use cases: presence validation, then the store, then response mapping.
pub struct DepartmentOperations;

impl DepartmentOperations {
    pub fn list<S: DepartmentStore>(store: &S) -> Result<Vec<DepartmentResponse>> {
        Ok(store
            .list_departments()?
            .into_iter()
            .map(DepartmentResponse::from)
            .collect())
    }

    pub fn get<S: DepartmentStore>(store: &S, id: Id) -> Result<DepartmentResponse> {
        store.get_department(id).map(DepartmentResponse::from)
    }

    pub fn create<S: DepartmentStore>(
        store: &S,
        validator: &Validator,
        request: DepartmentRequest,
    ) -> Result<DepartmentResponse> {
        validator.validate_create_department(&request)?;
        let name = request.into_name()?;
        store.create_department(&name).map(DepartmentResponse::from)
    }

    pub fn update<S: DepartmentStore>(
        store: &S,
        validator: &Validator,
        id: Id,
        request: DepartmentRequest,
    ) -> Result<DepartmentResponse> {
        validator.validate_update_department(&request)?;
        let name = request.into_name()?;
        store.update_department(id, &name).map(DepartmentResponse::from)
    }

    pub fn delete<S: DepartmentStore>(store: &S, id: Id) -> Result<()> {
        store.delete_department(id)
    }
}
