use serde::Deserialize;
use thiserror::Error;

/// Raw values exactly as read from the form. Everything stays text until
/// [`HumanForm::validate`] proves otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HumanForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub feet: String,
    #[serde(default)]
    pub inches: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub diet: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Height {
    pub feet: f64,
    pub inches: f64,
}

impl Height {
    /// Total height in inches. Degenerate components count as zero.
    pub fn total_inches(&self) -> f64 {
        let feet = if self.feet.is_finite() { self.feet } else { 0.0 };
        let inches = if self.inches.is_finite() {
            self.inches
        } else {
            0.0
        };
        feet * 12.0 + inches
    }
}

/// Every failed check, accumulated before reporting.
#[derive(Debug, Clone, Error)]
#[error("{}", .messages.join("\n"))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

/// A validated person record, constructed once per submission.
#[derive(Debug, Clone)]
pub struct Human {
    pub name: String,
    pub height: Height,
    pub height_inches: f64,
    pub weight: f64,
    pub diet: String,
}

impl HumanForm {
    /// Runs every check and reports all failures at once. No partial
    /// [`Human`] is ever produced.
    pub fn validate(&self) -> Result<Human, ValidationError> {
        let mut messages = Vec::new();

        if self.name.is_empty() {
            messages.push("Human name cannot be empty.".to_string());
        }

        let weight = parse_field(&self.weight);
        match weight {
            None => messages.push("Human weight cannot be empty.".to_string()),
            Some(w) if w <= 0.0 => {
                messages.push("Human weight cannot be negative or 0.".to_string());
            }
            Some(_) => {}
        }

        let feet = parse_field(&self.feet);
        let inches = parse_field(&self.inches);
        let height = if feet.is_none() && inches.is_none() {
            messages.push("Human height (feet and inches) cannot be empty.".to_string());
            Height {
                feet: 0.0,
                inches: 0.0,
            }
        } else {
            // A single missing component normalizes to zero.
            let feet = feet.unwrap_or(0.0);
            let inches = inches.unwrap_or(0.0);
            if feet < 0.0 || inches < 0.0 {
                messages.push("Height (feet or inches) cannot be negative.".to_string());
            } else if feet == 0.0 && inches == 0.0 {
                messages.push("Human height (feet and inches) cannot be 0.".to_string());
            }
            Height { feet, inches }
        };

        if !messages.is_empty() {
            return Err(ValidationError { messages });
        }

        Ok(Human {
            name: self.name.clone(),
            height,
            height_inches: height.total_inches(),
            weight: weight.unwrap_or(0.0),
            diet: self.diet.clone(),
        })
    }
}

fn parse_field(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
