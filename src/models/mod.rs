pub mod department;
pub mod employee;

use serde::{Deserialize, Serialize};

use department::Department;

/// Root of the in-memory tree, serialized as-is for `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub departamentos: Vec<Department>,
}
