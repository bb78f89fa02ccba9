use parking_lot::Mutex;

use crate::error::{Result, RosterError};
use crate::model::{names_match, next_id, Department, Employee, Id, NewEmployee};
use crate::store::traits::{DepartmentStore, EmployeeStore};

/// Both collections, guarded together by one lock in [`MemoryStore`].
#[derive(Debug, Default)]
struct Tables {
    departments: Vec<Department>,
    employees: Vec<Employee>,
}

impl Tables {
    fn department(&self, id: Id) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    fn department_position(&self, id: Id) -> Result<usize> {
        self.departments
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| RosterError::department_not_found(id))
    }

    fn employee_position(&self, id: Id) -> Result<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RosterError::employee_not_found(id))
    }

    /// Referenced department for a write; an unresolved reference is the caller's fault.
    fn verify_department_reference(&self, id: Id) -> Result<()> {
        if self.department(id).is_some() {
            Ok(())
        } else {
            log::warn!("Rejected employee write referencing missing department {}", id);
            Err(RosterError::Conflict(format!(
                "No department with the specified ID ({}) could be found.",
                id
            )))
        }
    }

    fn assert_name_is_unique(&self, name: &str, except: Option<Id>) -> Result<()> {
        let taken = self
            .departments
            .iter()
            .any(|d| Some(d.id) != except && names_match(&d.name, name));

        if taken {
            log::warn!("Rejected duplicate department name '{}'", name);
            return Err(RosterError::Conflict(format!(
                "A department with the specified name ('{}') already exists.",
                name
            )));
        }
        Ok(())
    }

    /// Copy a stored employee, optionally attaching a copy of its department.
    fn snapshot(&self, employee: &Employee, include_department: bool) -> Result<Employee> {
        let mut snapshot = employee.clone();
        if include_department {
            let department = self.department(employee.department_id).ok_or_else(|| {
                log::error!(
                    "Employee {} references missing department {}",
                    employee.id,
                    employee.department_id
                );
                RosterError::InternalInconsistency(format!(
                    "Referential integrity violation: No department with the ID that the employee record specifies ({}) could be found.",
                    employee.department_id
                ))
            })?;
            snapshot.department = Some(department.clone());
        }
        Ok(snapshot)
    }

    fn snapshots<'a, I>(&self, employees: I, include_department: bool) -> Result<Vec<Employee>>
    where
        I: IntoIterator<Item = &'a Employee>,
    {
        employees
            .into_iter()
            .map(|e| self.snapshot(e, include_department))
            .collect()
    }
}

/// In-memory store for departments and employees.
///
/// Every operation runs under a single lock covering both collections, so each
/// check-then-write sequence (uniqueness, references, dependents) is atomic with
/// respect to concurrent requests. Nothing handed out aliases stored records.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DepartmentStore for MemoryStore {
    fn list_departments(&self) -> Result<Vec<Department>> {
        let tables = self.tables.lock();
        Ok(tables.departments.clone())
    }

    fn get_department(&self, id: Id) -> Result<Department> {
        let tables = self.tables.lock();
        tables
            .department(id)
            .cloned()
            .ok_or_else(|| RosterError::department_not_found(id))
    }

    fn create_department(&self, name: &str) -> Result<Department> {
        let mut tables = self.tables.lock();
        let name = name.trim();
        tables.assert_name_is_unique(name, None)?;

        let department = Department::new(next_id(tables.departments.iter().map(|d| d.id)), name);
        tables.departments.push(department.clone());
        log::info!("Created department {} '{}'", department.id, department.name);
        Ok(department)
    }

    fn update_department(&self, id: Id, name: &str) -> Result<Department> {
        let mut tables = self.tables.lock();
        let index = tables.department_position(id)?;
        let name = name.trim();
        tables.assert_name_is_unique(name, Some(id))?;

        let department = &mut tables.departments[index];
        department.name = name.to_string();
        log::info!("Renamed department {} to '{}'", id, name);
        Ok(department.clone())
    }

    fn delete_department(&self, id: Id) -> Result<()> {
        let mut tables = self.tables.lock();
        let index = tables.department_position(id)?;

        if tables.employees.iter().any(|e| e.department_id == id) {
            log::warn!("Refused to delete department {} while it has employees", id);
            return Err(RosterError::Conflict(
                "The specified department has employees; please delete all employees before deleting the department."
                    .to_string(),
            ));
        }

        let removed = tables.departments.remove(index);
        log::info!("Deleted department {} '{}'", removed.id, removed.name);
        Ok(())
    }
}

impl EmployeeStore for MemoryStore {
    fn list_employees(&self, include_department: bool) -> Result<Vec<Employee>> {
        let tables = self.tables.lock();
        tables.snapshots(&tables.employees, include_department)
    }

    fn list_employees_by_department(
        &self,
        department_id: Id,
        include_department: bool,
    ) -> Result<Vec<Employee>> {
        let tables = self.tables.lock();
        if tables.department(department_id).is_none() {
            return Err(RosterError::department_not_found(department_id));
        }

        tables.snapshots(
            tables
                .employees
                .iter()
                .filter(|e| e.department_id == department_id),
            include_department,
        )
    }

    fn get_employee(&self, id: Id, include_department: bool) -> Result<Employee> {
        let tables = self.tables.lock();
        let index = tables.employee_position(id)?;
        tables.snapshot(&tables.employees[index], include_department)
    }

    fn create_employee(&self, employee: NewEmployee) -> Result<Employee> {
        let mut tables = self.tables.lock();
        tables.verify_department_reference(employee.department_id)?;

        let id = next_id(tables.employees.iter().map(|e| e.id));
        let employee = employee.into_employee(id);
        log::info!(
            "Created employee {} '{} {}' in department {}",
            employee.id,
            employee.first_name,
            employee.last_name,
            employee.department_id
        );
        let snapshot = tables.snapshot(&employee, true)?;
        tables.employees.push(employee);
        Ok(snapshot)
    }

    fn update_employee(&self, id: Id, employee: NewEmployee) -> Result<Employee> {
        let mut tables = self.tables.lock();
        let index = tables.employee_position(id)?;
        tables.verify_department_reference(employee.department_id)?;

        tables.employees[index].apply(employee);
        log::info!("Updated employee {}", id);
        tables.snapshot(&tables.employees[index], true)
    }

    fn delete_employee(&self, id: Id) -> Result<()> {
        let mut tables = self.tables.lock();
        let index = tables.employee_position(id)?;
        tables.employees.remove(index);
        log::info!("Deleted employee {}", id);
        Ok(())
    }
}
