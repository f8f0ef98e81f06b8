//! Python bindings for the control parameters
//!
//! Exposes [`MeteoControl`] as `meteo._lib.core.MeteoControl`. Monthly
//! parameters accept either a float or a list of twelve floats and are
//! returned as lists, with `None` for undefined months.

use crate::config::ControlConfig;
use crate::control::MeteoControl;
use crate::errors::MeteoError;
use crate::FloatValue;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<MeteoError> for PyErr {
    fn from(e: MeteoError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

/// A float or a list of floats supplied from Python
#[derive(FromPyObject)]
pub enum PyParameterValue {
    Scalar(FloatValue),
    List(Vec<FloatValue>),
}

impl PyParameterValue {
    fn into_vec(self) -> Vec<FloatValue> {
        match self {
            PyParameterValue::Scalar(v) => vec![v],
            PyParameterValue::List(vs) => vs,
        }
    }
}

/// Python wrapper for MeteoControl
///
/// Example:
///     control = MeteoControl()
///     control.angstromfactor = 0.6
///     control.angstromconstant = 0.5
///     control.angstromconstant  # [0.4, 0.4, ...]
#[pyclass(name = "MeteoControl", module = "meteo.core")]
#[derive(Debug, Clone)]
pub struct PyMeteoControl(pub MeteoControl);

impl PyMeteoControl {
    fn set(&mut self, name: &str, value: PyParameterValue) -> PyResult<()> {
        Ok(self.0.set_by_name(name, &value.into_vec())?)
    }

    fn get(&self, name: &str) -> PyResult<Vec<Option<FloatValue>>> {
        Ok(self.0.get_by_name(name)?)
    }
}

#[pymethods]
impl PyMeteoControl {
    #[new]
    #[pyo3(signature = (defaults=true))]
    fn new(defaults: bool) -> Self {
        if defaults {
            Self(MeteoControl::with_defaults())
        } else {
            Self(MeteoControl::new())
        }
    }

    /// Create a container from defaults overridden by a TOML document
    #[staticmethod]
    fn from_toml(content: &str) -> PyResult<Self> {
        let config = ControlConfig::from_toml_str(content)?;
        Ok(Self(MeteoControl::from_config(&config)?))
    }

    #[getter]
    fn latitude(&self) -> Option<FloatValue> {
        self.0.latitude().value()
    }

    #[setter]
    fn set_latitude(&mut self, value: FloatValue) {
        self.0.set_latitude(value);
    }

    #[getter]
    fn longitude(&self) -> Option<FloatValue> {
        self.0.longitude().value()
    }

    #[setter]
    fn set_longitude(&mut self, value: FloatValue) {
        self.0.set_longitude(value);
    }

    #[getter]
    fn angstromconstant(&self) -> PyResult<Vec<Option<FloatValue>>> {
        self.get("angstromconstant")
    }

    #[setter]
    fn set_angstromconstant(&mut self, value: PyParameterValue) -> PyResult<()> {
        self.set("angstromconstant", value)
    }

    #[getter]
    fn angstromfactor(&self) -> PyResult<Vec<Option<FloatValue>>> {
        self.get("angstromfactor")
    }

    #[setter]
    fn set_angstromfactor(&mut self, value: PyParameterValue) -> PyResult<()> {
        self.set("angstromfactor", value)
    }

    #[getter]
    fn angstromalternative(&self) -> PyResult<Vec<Option<FloatValue>>> {
        self.get("angstromalternative")
    }

    #[setter]
    fn set_angstromalternative(&mut self, value: PyParameterValue) -> PyResult<()> {
        self.set("angstromalternative", value)
    }

    /// Assign a parameter by its lowercase name
    fn set_parameter(&mut self, name: &str, value: PyParameterValue) -> PyResult<()> {
        self.set(name, value)
    }

    /// Get a parameter by its lowercase name
    fn get_parameter(&self, name: &str) -> PyResult<Vec<Option<FloatValue>>> {
        self.get(name)
    }

    /// Raise ValueError if any value is undefined, out of bounds or violates
    /// the joint Ångström constraint
    fn verify(&self) -> PyResult<()> {
        Ok(self.0.verify()?)
    }

    fn __repr__(&self) -> String {
        self.0.to_string()
    }
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMeteoControl>()?;
    Ok(())
}
