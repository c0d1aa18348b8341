use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use validator::Validate;

use crate::utils::validation::EMAIL_PATTERN;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(rename = "id_empleado")]
    pub employee_id: String,
    #[serde(rename = "nombre_empleado")]
    pub name: String,
    #[serde(rename = "apellidos_empleado")]
    pub surname: String,
    #[serde(rename = "email_empleado")]
    pub email: String,
    #[serde(rename = "genero_empleado")]
    pub gender: String,
    #[serde(rename = "puesto_empleado")]
    pub job_title: String,
    #[serde(rename = "salario_anual_empleado")]
    pub annual_salary: Number,
    #[serde(rename = "seguro_empleado")]
    pub insurance: Value,
    #[serde(rename = "foto_empleado")]
    pub photo_url: String,
    #[serde(rename = "codigo_acceso")]
    pub access_code: Value,
    /// Seed attributes outside the schema, kept across updates.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for POST and PUT. Every field is kept as raw JSON until the
/// required-field check has run.
#[derive(Deserialize, Debug, Default)]
pub struct EmployeePayload {
    pub nombre_empleado: Option<Value>,
    pub apellidos_empleado: Option<Value>,
    pub email_empleado: Option<Value>,
    pub genero_empleado: Option<Value>,
    pub puesto_empleado: Option<Value>,
    pub salario_anual_empleado: Option<Value>,
    pub seguro_empleado: Option<Value>,
    pub codigo_acceso: Option<Value>,
}

/// The caller-supplied part of an employee record.
#[derive(Debug, Clone, Validate)]
pub struct EmployeeFields {
    pub name: String,
    pub surname: String,
    #[validate(regex(path = "EMAIL_PATTERN", message = "El formato del email no es válido."))]
    pub email: String,
    pub gender: String,
    pub job_title: String,
    pub annual_salary: Number,
    pub insurance: Value,
    pub access_code: Value,
}

impl Employee {
    pub fn new(employee_id: String, photo_url: String, fields: EmployeeFields) -> Self {
        Self {
            employee_id,
            name: fields.name,
            surname: fields.surname,
            email: fields.email,
            gender: fields.gender,
            job_title: fields.job_title,
            annual_salary: fields.annual_salary,
            insurance: fields.insurance,
            photo_url,
            access_code: fields.access_code,
            extra: Map::new(),
        }
    }

    /// Overwrites every caller-supplied field, keeping id and photo.
    pub fn merged_with(&self, fields: EmployeeFields) -> Self {
        Self {
            name: fields.name,
            surname: fields.surname,
            email: fields.email,
            gender: fields.gender,
            job_title: fields.job_title,
            annual_salary: fields.annual_salary,
            insurance: fields.insurance,
            access_code: fields.access_code,
            ..self.clone()
        }
    }
}
