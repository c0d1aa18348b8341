use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeFields};
use crate::models::Dataset;
use crate::utils::validation::validate_salary;

pub const DEPARTMENT_NOT_FOUND: &str = "Departamento no encontrado";
pub const EMPLOYEE_NOT_IN_DEPARTMENT: &str = "Empleado no encontrado en el departamento";
pub const EMPLOYEE_NOT_FOUND: &str = "Empleado no encontrado";

const BUNDLED_SEED: &str = include_str!("../../data/seed.json");

/// In-memory department/employee tree. Every operation holds the lock for
/// its whole read-modify-write.
pub struct Directory {
    data: Mutex<Dataset>,
}

impl Directory {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            data: Mutex::new(dataset),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Dataset>, AppError> {
        self.data
            .lock()
            .map_err(|_| AppError::InternalServerError("Directory store is unavailable".to_string()))
    }

    pub fn snapshot(&self) -> Result<Dataset, AppError> {
        Ok(self.lock()?.clone())
    }

    pub fn departments(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.lock()?.departamentos.clone())
    }

    pub fn department(&self, department_id: &str) -> Result<Department, AppError> {
        let data = self.lock()?;
        debug!(
            "Looking up department {} among {:?}",
            department_id,
            data.departamentos
                .iter()
                .map(|d| d.department_id.as_str())
                .collect::<Vec<_>>()
        );
        find_department(&data, department_id).cloned()
    }

    pub fn employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self
            .lock()?
            .departamentos
            .iter()
            .flat_map(|d| d.employees.iter().cloned())
            .collect())
    }

    pub fn create_employee(
        &self,
        department_id: &str,
        fields: EmployeeFields,
    ) -> Result<Employee, AppError> {
        validate_salary(&fields.annual_salary)?;

        let mut data = self.lock()?;
        let department = find_department_mut(&mut data, department_id)?;

        let employee = Employee::new(
            Uuid::new_v4().to_string(),
            format!("https://robohash.org/{}?set=set1", Uuid::new_v4()),
            fields,
        );
        department.employees.push(employee.clone());
        info!(
            "Created employee {} in department {}",
            employee.employee_id, department_id
        );
        Ok(employee)
    }

    pub fn update_employee(
        &self,
        department_id: &str,
        employee_id: &str,
        fields: EmployeeFields,
    ) -> Result<Employee, AppError> {
        let mut data = self.lock()?;
        let department = find_department_mut(&mut data, department_id)?;
        let index = department.employee_index(employee_id).ok_or_else(|| {
            warn!("Employee {} not found in department {}", employee_id, department_id);
            AppError::NotFound(EMPLOYEE_NOT_IN_DEPARTMENT.to_string())
        })?;

        let updated = department.employees[index].merged_with(fields);
        department.employees[index] = updated.clone();
        info!("Updated employee {} in department {}", employee_id, department_id);
        Ok(updated)
    }

    pub fn delete_employee(&self, department_id: &str, employee_id: &str) -> Result<(), AppError> {
        let mut data = self.lock()?;
        let department = find_department_mut(&mut data, department_id)?;
        let index = department.employee_index(employee_id).ok_or_else(|| {
            warn!("Employee {} not found in department {}", employee_id, department_id);
            AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string())
        })?;

        department.employees.remove(index);
        info!("Deleted employee {} from department {}", employee_id, department_id);
        Ok(())
    }
}

fn find_department<'a>(data: &'a Dataset, department_id: &str) -> Result<&'a Department, AppError> {
    data.departamentos
        .iter()
        .find(|d| d.department_id == department_id)
        .ok_or_else(|| department_not_found(department_id))
}

fn find_department_mut<'a>(
    data: &'a mut Dataset,
    department_id: &str,
) -> Result<&'a mut Department, AppError> {
    data.departamentos
        .iter_mut()
        .find(|d| d.department_id == department_id)
        .ok_or_else(|| department_not_found(department_id))
}

fn department_not_found(department_id: &str) -> AppError {
    warn!("Department not found for id {}", department_id);
    AppError::NotFound(DEPARTMENT_NOT_FOUND.to_string())
}

pub fn parse_dataset(raw: &str) -> Result<Dataset, AppError> {
    let dataset: Dataset = serde_json::from_str(raw)
        .map_err(|err| AppError::Config(format!("invalid dataset: {}", err)))?;

    let mut departments = HashSet::new();
    let mut employees = HashSet::new();
    for department in &dataset.departamentos {
        if !departments.insert(department.department_id.as_str()) {
            return Err(AppError::Config(format!(
                "duplicate department id {}",
                department.department_id
            )));
        }
        for employee in &department.employees {
            if !employees.insert(employee.employee_id.as_str()) {
                return Err(AppError::Config(format!(
                    "duplicate employee id {}",
                    employee.employee_id
                )));
            }
        }
    }
    Ok(dataset)
}

/// Builds the store from `data_file`, or from the bundled seed when unset.
pub fn create_store(data_file: Option<&Path>) -> Result<Directory, AppError> {
    let dataset = match data_file {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|err| {
                AppError::Config(format!("cannot read {}: {}", path.display(), err))
            })?;
            parse_dataset(&raw)?
        }
        None => parse_dataset(BUNDLED_SEED)?,
    };

    let employees: usize = dataset.departamentos.iter().map(|d| d.employees.len()).sum();
    info!(
        "Loaded {} departments with {} employees",
        dataset.departamentos.len(),
        employees
    );
    Ok(Directory::new(dataset))
}
