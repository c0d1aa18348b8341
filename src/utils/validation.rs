use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;
use crate::models::employee::{EmployeeFields, EmployeePayload};

pub const MIN_ANNUAL_SALARY: f64 = 24000.0;

pub const MISSING_FIELD_MESSAGE: &str = "La solicitud debe contener nombre_empleado, apellidos_empleado, email_empleado, genero_empleado, puesto_empleado, salario_anual_empleado, seguro_empleado, codigo_acceso";
pub const SALARY_TOO_LOW_MESSAGE: &str = "El salario no puede ser inferior a 24000";

/// Unanchored: `x a@b.c y` is accepted.
pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|err| AppError::BadRequest(first_message(&err)))
}

fn first_message(err: &ValidationErrors) -> String {
    err.field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| err.to_string())
}

/// Falsy values: null, false, 0, and the empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required(value: Option<Value>) -> Result<Value, AppError> {
    match value {
        Some(v) if is_truthy(&v) => Ok(v),
        _ => Err(AppError::BadRequest(MISSING_FIELD_MESSAGE.to_string())),
    }
}

fn text(field: &str, value: Value) -> Result<String, AppError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(AppError::BadRequest(format!(
            "El campo {} debe ser una cadena de texto",
            field
        ))),
    }
}

fn number(field: &str, value: Value) -> Result<Number, AppError> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(AppError::BadRequest(format!("El campo {} debe ser numérico", field))),
    }
}

/// Runs the checks shared by create and update: every field present and
/// truthy, then the field types, then the email pattern.
pub fn employee_fields(payload: EmployeePayload) -> Result<EmployeeFields, AppError> {
    let name = required(payload.nombre_empleado)?;
    let surname = required(payload.apellidos_empleado)?;
    let email = required(payload.email_empleado)?;
    let gender = required(payload.genero_empleado)?;
    let job_title = required(payload.puesto_empleado)?;
    let annual_salary = required(payload.salario_anual_empleado)?;
    let insurance = required(payload.seguro_empleado)?;
    let access_code = required(payload.codigo_acceso)?;

    let fields = EmployeeFields {
        name: text("nombre_empleado", name)?,
        surname: text("apellidos_empleado", surname)?,
        email: text("email_empleado", email)?,
        gender: text("genero_empleado", gender)?,
        job_title: text("puesto_empleado", job_title)?,
        annual_salary: number("salario_anual_empleado", annual_salary)?,
        insurance,
        access_code,
    };
    validate_payload(&fields)?;
    Ok(fields)
}

pub fn validate_salary(annual_salary: &Number) -> Result<(), AppError> {
    match annual_salary.as_f64() {
        Some(salary) if salary >= MIN_ANNUAL_SALARY => Ok(()),
        _ => Err(AppError::BadRequest(SALARY_TOO_LOW_MESSAGE.to_string())),
    }
}
