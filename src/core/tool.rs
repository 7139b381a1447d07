use serde::{Deserialize, Serialize};

/// Primitive type of a tool parameter as advertised to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Object,
    Boolean,
}

impl ParamType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Object => "object",
            Self::Boolean => "boolean",
        }
    }

    /// Whether a JSON value is of this type.
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Object => value.is_object(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// Where an adapter places a parameter on the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ParamType,
    pub location: ParamLocation,
    pub required: bool,
    pub description: String,
}

/// Discovery descriptor of a tool. Parameters keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ToolParam>,
}

impl ToolDescriptor {
    pub fn params_in(&self, location: ParamLocation) -> impl Iterator<Item = &ToolParam> {
        self.params
            .iter()
            .filter(move |param| param.location == location)
    }

    pub fn required(&self) -> impl Iterator<Item = &ToolParam> {
        self.params.iter().filter(|param| param.required)
    }

    /// JSON schema of the argument object, as tool protocols expect it.
    pub fn input_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        for param in &self.params {
            let mut property = serde_json::Map::new();
            property.insert("type".into(), param.ty.as_str().into());
            if !param.description.is_empty() {
                property.insert("description".into(), param.description.clone().into());
            }
            properties.insert(param.name.clone(), serde_json::Value::Object(property));
        }

        let required: Vec<serde_json::Value> = self
            .required()
            .map(|param| serde_json::Value::String(param.name.clone()))
            .collect();

        let mut schema = serde_json::Map::new();
        schema.insert("type".into(), "object".into());
        schema.insert("properties".into(), serde_json::Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), serde_json::Value::Array(required));
        }
        serde_json::Value::Object(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: "get_channels_channel_id_messages".into(),
            description: "Get message history for a channel".into(),
            params: vec![
                ToolParam {
                    name: "channel_id".into(),
                    ty: ParamType::String,
                    location: ParamLocation::Path,
                    required: true,
                    description: "Channel name".into(),
                },
                ToolParam {
                    name: "limit".into(),
                    ty: ParamType::Number,
                    location: ParamLocation::Query,
                    required: false,
                    description: String::new(),
                },
            ],
        }
    }

    #[test]
    fn input_schema_lists_properties_and_required() {
        let schema = descriptor().input_schema();
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "channel_id": {"type": "string", "description": "Channel name"},
                    "limit": {"type": "number"}
                },
                "required": ["channel_id"]
            })
        );
    }

    #[test]
    fn schema_without_required_params_omits_required() {
        let mut descriptor = descriptor();
        descriptor.params.remove(0);
        let schema = descriptor.input_schema();
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn param_type_matches_json_values() {
        assert!(ParamType::String.matches(&json!("abc")));
        assert!(ParamType::Number.matches(&json!(1.5)));
        assert!(ParamType::Object.matches(&json!({})));
        assert!(ParamType::Boolean.matches(&json!(false)));
        assert!(!ParamType::String.matches(&json!(12)));
    }

    #[test]
    fn params_filter_by_location() {
        let descriptor = descriptor();
        let path: Vec<_> = descriptor
            .params_in(ParamLocation::Path)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(path, vec!["channel_id"]);
    }
}
