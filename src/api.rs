//! Types received from the Lambda Extensions API.
//!
//! The extension registers with the host at startup; the registration
//! response describes the function the extension is attached to, including
//! the handler identifier the platform will invoke.

use serde::Deserialize;

/// Response body of the extension `register` call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    /// Name of the Lambda function.
    #[serde(default)]
    pub function_name: String,

    /// Version of the function the extension registered against.
    #[serde(default)]
    pub function_version: String,

    /// Handler identifier as declared to the platform.
    #[serde(default)]
    pub handler: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_register_payload() {
        let body = r#"{
            "functionName": "my-function",
            "functionVersion": "$LATEST",
            "handler": "path/to/app.handler"
        }"#;

        let reg: RegistrationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(reg.function_name, "my-function");
        assert_eq!(reg.function_version, "$LATEST");
        assert_eq!(reg.handler, "path/to/app.handler");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let reg: RegistrationResponse = serde_json::from_str("{}").unwrap();
        assert!(reg.handler.is_empty());
    }
}
