use flowstep::AnswersSummary;
use serde_json::{Map, Value, json};

use crate::ProfileContext;

/// How a committed answer sequence appears in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldShape {
    /// The full answer sequence as a JSON array of strings.
    #[default]
    List,

    /// The first answer as a JSON string.
    Scalar,
}

#[derive(Debug, Clone)]
struct FieldMapping {
    prompt: String,
    key: String,
    shape: FieldShape,
}

/// Maps committed answers onto the domain-specific field names of a flow's
/// submission endpoint.
///
/// Entries are declared in payload order. Prompts with no committed answer
/// are omitted from the payload rather than serialized as null.
#[derive(Debug, Clone, Default)]
pub struct PayloadMapping {
    root: Option<String>,
    fields: Vec<FieldMapping>,
}

impl PayloadMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the compiled object under a single root key,
    /// e.g. `"financialGoals"`.
    #[must_use]
    pub fn with_root(mut self, key: impl Into<String>) -> Self {
        self.root = Some(key.into());
        self
    }

    /// Map a prompt's answers to a field as a JSON array.
    #[must_use]
    pub fn field(mut self, prompt: impl Into<String>, key: impl Into<String>) -> Self {
        self.fields.push(FieldMapping {
            prompt: prompt.into(),
            key: key.into(),
            shape: FieldShape::List,
        });
        self
    }

    /// Map a prompt's first answer to a field as a JSON string.
    #[must_use]
    pub fn scalar_field(mut self, prompt: impl Into<String>, key: impl Into<String>) -> Self {
        self.fields.push(FieldMapping {
            prompt: prompt.into(),
            key: key.into(),
            shape: FieldShape::Scalar,
        });
        self
    }

    /// Compile the answer summary into the submission payload.
    ///
    /// When a profile context is present its name fields are included at the
    /// top level, outside any root key.
    pub fn compile(&self, summary: &AnswersSummary, profile: Option<&ProfileContext>) -> Value {
        let mut object = Map::new();
        for field in &self.fields {
            let Some(answers) = summary.get(&field.prompt) else {
                continue;
            };
            let value = match field.shape {
                FieldShape::List => json!(answers),
                FieldShape::Scalar => match answers.first() {
                    Some(first) => json!(first),
                    None => continue,
                },
            };
            object.insert(field.key.clone(), value);
        }

        let mut payload = match &self.root {
            Some(root) => {
                let mut wrapper = Map::new();
                wrapper.insert(root.clone(), Value::Object(object));
                wrapper
            }
            None => object,
        };

        if let Some(profile) = profile {
            payload.insert("firstName".to_string(), json!(profile.first_name));
            payload.insert("lastName".to_string(), json!(profile.last_name));
        }

        Value::Object(payload)
    }
}
