use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::employee::Employee;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    #[serde(rename = "id_departamento")]
    pub department_id: String,
    #[serde(rename = "nombre_departamento")]
    pub name: String,
    #[serde(rename = "empleados_departamento", default)]
    pub employees: Vec<Employee>,
    /// Seed attributes this service does not interpret, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Department {
    pub fn employee_index(&self, employee_id: &str) -> Option<usize> {
        self.employees
            .iter()
            .position(|e| e.employee_id == employee_id)
    }
}
