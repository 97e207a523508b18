//! JSON Schema capability converter.
//!
//! Default implementation of [`CapabilitySchemaPort`]. Produces function
//! declarations in the shape function-calling APIs expect:
//! `{name, description, parameters: {type: "object", properties, required}}`.

use hospital_application::ports::capability_schema::CapabilitySchemaPort;
use hospital_domain::CapabilityDeclaration;
use serde_json::{Map, Value, json};

/// Handles param_type → JSON Schema type mapping:
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
///
/// Enumerated parameters get an `enum` list.
pub struct JsonSchemaCapabilityConverter;

impl CapabilitySchemaPort for JsonSchemaCapabilityConverter {
    fn declaration_to_schema(&self, declaration: &CapabilityDeclaration) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &declaration.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(schema_type));
            prop.insert("description".to_string(), json!(param.description));
            if param.is_enumerated() {
                prop.insert("enum".to_string(), json!(param.allowed_values));
            }
            properties.insert(param.name.clone(), Value::Object(prop));

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": declaration.name,
            "description": declaration.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::CapabilityRegistry;
    use hospital_domain::{CapabilityGroup, CapabilityParameter};

    #[test]
    fn test_declaration_to_schema() {
        let declaration = CapabilityDeclaration::new(
            "access_medical_records",
            "Mengakses rekam medis",
            CapabilityGroup::MedicalRecords,
        )
        .with_parameter(CapabilityParameter::new("patientName", "Nama pasien.", true))
        .with_parameter(
            CapabilityParameter::new("queryType", "Jenis informasi.", true)
                .with_allowed_values(["history", "test_results", "diagnosis"]),
        )
        .with_parameter(
            CapabilityParameter::new("attempt", "Percobaan ke-", false).with_type("integer"),
        );

        let schema = JsonSchemaCapabilityConverter.declaration_to_schema(&declaration);

        assert_eq!(schema["name"], "access_medical_records");
        assert_eq!(schema["parameters"]["type"], "object");

        let props = &schema["parameters"]["properties"];
        assert_eq!(props["patientName"]["type"], "string");
        assert!(props["patientName"].get("enum").is_none());
        assert_eq!(
            props["queryType"]["enum"],
            json!(["history", "test_results", "diagnosis"])
        );
        assert_eq!(props["attempt"]["type"], "integer");

        assert_eq!(
            schema["parameters"]["required"],
            json!(["patientName", "queryType"])
        );
    }

    #[test]
    fn test_catalog_schema_keeps_registry_order() {
        let registry = CapabilityRegistry::hospital().unwrap();
        let schemas = JsonSchemaCapabilityConverter.catalog_schema(registry.catalog());

        let names: Vec<&str> = schemas
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "manage_patient",
                "manage_appointment",
                "access_medical_records",
                "process_billing_insurance",
            ]
        );
        // Stable across calls
        assert_eq!(
            schemas,
            JsonSchemaCapabilityConverter.catalog_schema(registry.catalog())
        );
    }
}
