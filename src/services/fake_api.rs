// src/services/fake_api.rs

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::common::error::AppError;
use crate::services::ApiService;

// Llamada registrada: método, ruta y cuerpo (si hubo)
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

// Respuesta guionada por "MÉTODO ruta". `None` (o una ruta sin guionar)
// simula un backend caído que contesta 503 sin JSON, igual que haría
// `HttpApiService`. Las fallas de conexión reales se prueban contra un
// puerto cerrado en `api_service`.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<HashMap<String, Option<Value>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: &str, path: &str, value: Value) -> Self {
        self.set(method, path, Some(value));
        self
    }

    /// La ruta contesta como un backend caído: `AppError::Http { status: 503 }`.
    pub fn fail(self, method: &str, path: &str) -> Self {
        self.set(method, path, None);
        self
    }

    pub fn set(&self, method: &str, path: &str, value: Option<Value>) {
        self.responses
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), value);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Solo "MÉTODO ruta", para comparar el orden de las llamadas.
    pub fn call_log(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| format!("{} {}", c.method, c.path))
            .collect()
    }

    fn answer(&self, method: &'static str, path: &str, body: Option<Value>) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body,
        });

        match self.responses.lock().unwrap().get(&format!("{method} {path}")) {
            Some(Some(value)) => Ok(value.clone()),
            _ => Err(AppError::Http { status: 503 }),
        }
    }
}

#[async_trait]
impl ApiService for FakeApi {
    async fn get(&self, path: &str) -> Result<Value, AppError> {
        self.answer("GET", path, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.answer("POST", path, Some(body))
    }
}
