use crate::error::Result;
use crate::model::{Department, Employee, Id, NewEmployee};

/// Department collection. Every returned value is an independent copy.
pub trait DepartmentStore: Send + Sync {
    /// All departments in insertion order
    fn list_departments(&self) -> Result<Vec<Department>>;
    fn get_department(&self, id: Id) -> Result<Department>;
    /// Create a department; the name is trimmed and must be unique ignoring case
    fn create_department(&self, name: &str) -> Result<Department>;
    fn update_department(&self, id: Id, name: &str) -> Result<Department>;
    /// Delete a department; refused while any employee still references it
    fn delete_department(&self, id: Id) -> Result<()>;
}

/// Employee collection. Every returned value is an independent copy.
pub trait EmployeeStore: Send + Sync {
    fn list_employees(&self, include_department: bool) -> Result<Vec<Employee>>;
    fn list_employees_by_department(
        &self,
        department_id: Id,
        include_department: bool,
    ) -> Result<Vec<Employee>>;
    fn get_employee(&self, id: Id, include_department: bool) -> Result<Employee>;
    /// Create an employee; the returned snapshot always carries its department
    fn create_employee(&self, employee: NewEmployee) -> Result<Employee>;
    /// Replace every mutable field of an employee; the returned snapshot always carries its department
    fn update_employee(&self, id: Id, employee: NewEmployee) -> Result<Employee>;
    fn delete_employee(&self, id: Id) -> Result<()>;
}

pub trait Store: DepartmentStore + EmployeeStore + Send + Sync {}
impl<T: DepartmentStore + EmployeeStore> Store for T {}
