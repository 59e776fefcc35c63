//! OpenAPI document served at `/api-docs`.

use serde_json::{json, Value};

use super::validation::{MAX_VALUE, MIN_VALUE};
use crate::routes::{API_PREFIX, CONVERT, CONVERT_ALL};

const UNIT_NAMES: [&str; 3] = ["celsius", "fahrenheit", "kelvin"];

/// Build the OpenAPI 3.0 description of the conversion API.
pub fn openapi_document() -> Value {
    let unit_schema = json!({ "type": "string", "enum": UNIT_NAMES });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Temperature Converter API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Convert temperatures between the Celsius, Fahrenheit and Kelvin scales"
        },
        "servers": [{ "url": API_PREFIX }],
        "tags": [{ "name": "Temperature", "description": "Temperature conversions" }],
        "paths": {
            CONVERT: {
                "post": {
                    "summary": "Convert a temperature",
                    "tags": ["Temperature"],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/ConversionRequest" },
                                "examples": {
                                    "celsiusToFahrenheit": {
                                        "summary": "Celsius to Fahrenheit",
                                        "value": { "value": 100, "from": "celsius", "to": "fahrenheit" }
                                    },
                                    "fahrenheitToCelsius": {
                                        "summary": "Fahrenheit to Celsius",
                                        "value": { "value": 212, "from": "fahrenheit", "to": "celsius" }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Successful conversion",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "success": { "type": "boolean", "example": true },
                                            "data": { "$ref": "#/components/schemas/TemperatureConversion" },
                                            "message": { "type": "string", "example": "Converted 100°C to fahrenheit" }
                                        }
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "Validation failed",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                }
                            }
                        },
                        "500": { "description": "Internal server error" }
                    }
                }
            },
            CONVERT_ALL: {
                "get": {
                    "summary": "Convert a temperature into every other scale",
                    "tags": ["Temperature"],
                    "parameters": [
                        {
                            "in": "query",
                            "name": "value",
                            "required": true,
                            "schema": { "type": "number", "minimum": MIN_VALUE, "maximum": MAX_VALUE },
                            "example": 100
                        },
                        {
                            "in": "query",
                            "name": "from",
                            "required": true,
                            "schema": unit_schema,
                            "example": "celsius"
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Conversions into the other two scales",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "success": { "type": "boolean", "example": true },
                                            "data": {
                                                "type": "object",
                                                "properties": {
                                                    "original": {
                                                        "type": "object",
                                                        "properties": {
                                                            "value": { "type": "number" },
                                                            "unit": unit_schema
                                                        }
                                                    },
                                                    "conversions": {
                                                        "type": "array",
                                                        "items": { "$ref": "#/components/schemas/TemperatureConversion" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "Query validation failed",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "TemperatureConversion": {
                    "type": "object",
                    "properties": {
                        "from": unit_schema,
                        "to": unit_schema,
                        "value": { "type": "number", "example": 100 },
                        "result": { "type": "number", "example": 212 },
                        "formula": { "type": "string", "example": "100°C × 9/5 + 32 = 212°F" }
                    }
                },
                "ConversionRequest": {
                    "type": "object",
                    "required": ["value", "from", "to"],
                    "properties": {
                        "value": { "type": "number", "minimum": MIN_VALUE, "maximum": MAX_VALUE, "example": 100 },
                        "from": unit_schema,
                        "to": unit_schema
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string", "example": "Validation failed" },
                        "details": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "field": { "type": "string" },
                                    "message": { "type": "string" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_operations() {
        let doc = openapi_document();
        assert_eq!(doc["openapi"], "3.0.0");
        assert!(doc["paths"]["/convert"]["post"].is_object());
        assert!(doc["paths"]["/convert-all"]["get"].is_object());
        assert_eq!(doc["servers"][0]["url"], "/api");
    }

    #[test]
    fn test_document_schemas() {
        let doc = openapi_document();
        let schemas = &doc["components"]["schemas"];
        assert!(schemas["TemperatureConversion"].is_object());
        assert!(schemas["ErrorResponse"].is_object());
        assert_eq!(
            schemas["ConversionRequest"]["required"],
            json!(["value", "from", "to"])
        );
        assert_eq!(
            schemas["ConversionRequest"]["properties"]["from"]["enum"],
            json!(["celsius", "fahrenheit", "kelvin"])
        );
        assert_eq!(
            schemas["ConversionRequest"]["properties"]["value"]["maximum"],
            json!(10000.0)
        );
    }
}
