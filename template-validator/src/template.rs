//! Message template records and placeholder substitution.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use template_primitives::is_valid_placeholder_name;

use crate::error::{TemplateError, TemplateResult};
use crate::scanner::Tokens;

/// Conversation stage a template is written for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    /// Opening message.
    #[default]
    #[serde(rename = "Saludo")]
    Greeting,
    /// Lead qualification.
    #[serde(rename = "Calificación")]
    Qualification,
    /// Product presentation.
    #[serde(rename = "Presentación")]
    Presentation,
    /// Objection handling.
    #[serde(rename = "Objeciones")]
    Objections,
    /// Closing the sale.
    #[serde(rename = "Cierre")]
    Closing,
    /// Follow-up after a first contact.
    #[serde(rename = "Seguimiento")]
    FollowUp,
    /// Winning back a lost lead.
    #[serde(rename = "Recuperación")]
    Recovery,
    /// Upselling an existing customer.
    #[serde(rename = "Upselling")]
    Upselling,
    /// Renewal of a subscription.
    #[serde(rename = "Renovación")]
    Renewal,
}

impl TemplateCategory {
    /// All categories in editor order.
    pub const ALL: [Self; 9] = [
        Self::Greeting,
        Self::Qualification,
        Self::Presentation,
        Self::Objections,
        Self::Closing,
        Self::FollowUp,
        Self::Recovery,
        Self::Upselling,
        Self::Renewal,
    ];

    /// Label shown to template authors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Greeting => "Saludo",
            Self::Qualification => "Calificación",
            Self::Presentation => "Presentación",
            Self::Objections => "Objeciones",
            Self::Closing => "Cierre",
            Self::FollowUp => "Seguimiento",
            Self::Recovery => "Recuperación",
            Self::Upselling => "Upselling",
            Self::Renewal => "Renovación",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A message template as stored by the hosting application.
///
/// Placeholders use `[NAME]` syntax and are substituted at send time.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use template_validator::MessageTemplate;
///
/// let template = MessageTemplate::new("Saludo", "Hola [NOMBRE], ¿cómo estás?");
/// let values = HashMap::from([("NOMBRE".to_owned(), "Ana".to_owned())]);
///
/// assert_eq!(template.render_with(&values).unwrap(), "Hola Ana, ¿cómo estás?");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    title: String,
    #[serde(default)]
    description: String,
    body: String,
    #[serde(default)]
    category: TemplateCategory,
    #[serde(default)]
    active: bool,
}

impl MessageTemplate {
    /// Creates an inactive greeting template with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            body: body.into(),
            category: TemplateCategory::default(),
            active: false,
        }
    }

    /// Sets the description shown in the editor.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Files the template under `category`.
    #[must_use]
    pub fn with_category(mut self, category: TemplateCategory) -> Self {
        self.category = category;
        self
    }

    /// Marks the template as the active one.
    #[must_use]
    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }

    /// Replaces the body text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> TemplateCategory {
        self.category
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns true when the template is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Substitutes every well-formed placeholder with its value.
    ///
    /// Tokens whose names are malformed are copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingValue`] for the first well-formed
    /// placeholder without a value.
    pub fn render_with(&self, values: &HashMap<String, String>) -> TemplateResult<String> {
        let mut rendered = String::with_capacity(self.body.len());
        let mut copied = 0;

        for (name, span) in Tokens::new(&self.body) {
            if !is_valid_placeholder_name(name) {
                continue;
            }
            let value = values.get(name).ok_or_else(|| TemplateError::MissingValue {
                name: name.to_owned(),
            })?;
            rendered.push_str(&self.body[copied..span.start]);
            rendered.push_str(value);
            copied = span.end;
        }

        rendered.push_str(&self.body[copied..]);
        Ok(rendered)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}
