use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Id, NewEmployee};
use crate::store::Store;

fn date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| anyhow!("invalid seed date {}-{}-{}", year, month, day))
}

/// Helper function to build an employee for seeding
fn employee(
    department_id: Id,
    first_name: &str,
    last_name: &str,
    date_of_birth: DateTime<Utc>,
    date_of_death: Option<DateTime<Utc>>,
) -> NewEmployee {
    NewEmployee {
        department_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        date_of_death,
    }
}

/// Prepopulate the store with sample departments and employees.
///
/// Goes through the regular store operations, so every invariant applies to the sample data.
pub fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    let music = store.create_department("Music")?;
    let acting = store.create_department("Acting")?;

    let employees = [
        employee(
            music.id,
            "Johnny",
            "Cash",
            date(1932, 2, 26)?,
            Some(date(2003, 9, 12)?),
        ),
        employee(music.id, "Paul", "McCartney", date(1942, 6, 18)?, None),
        employee(acting.id, "Tom", "Hanks", date(1956, 7, 9)?, None),
        employee(
            music.id,
            "John",
            "Lennon",
            date(1940, 10, 9)?,
            Some(date(1980, 12, 8)?),
        ),
        employee(
            acting.id,
            "Leslie",
            "Nielsen",
            date(1926, 2, 11)?,
            Some(date(2010, 11, 28)?),
        ),
    ];

    for employee in employees {
        store.create_employee(employee)?;
    }

    log::info!("Seed data loaded: 2 departments, 5 employees");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DepartmentStore, EmployeeStore, MemoryStore};

    #[test]
    fn test_seed_data_is_consistent() {
        let store = MemoryStore::new();
        load_seed_data(&store).unwrap();

        let departments = store.list_departments().unwrap();
        let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Music", "Acting"]);

        let employees = store.list_employees(true).unwrap();
        assert_eq!(employees.len(), 5);
        assert_eq!(store.list_employees_by_department(1, false).unwrap().len(), 3);
        assert_eq!(employees[2].department.as_ref().unwrap().name, "Acting");

        // Seeding twice collides on the department names.
        assert!(load_seed_data(&store).is_err());
    }
}
