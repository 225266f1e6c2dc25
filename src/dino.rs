use serde::Deserialize;
use thiserror::Error;

use crate::human::Height;

/// One creature entry exactly as it appears in the data file. The numeric
/// fields arrive as JSON numbers or as text depending on the data source;
/// [`Dino::from_raw`] performs the coercion.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDino {
    pub species: String,
    pub weight: Measure,
    pub height: Measure,
    pub diet: String,
    #[serde(rename = "where")]
    pub origin: String,
    #[serde(rename = "when")]
    pub era: String,
    pub fact: String,
}

/// A numeric field that may be encoded as a bare number or as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Measure {
    fn parse(&self, field: &'static str, species: &str) -> Result<f64, ConstructionError> {
        match self {
            Measure::Number(n) => Ok(*n),
            Measure::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(ConstructionError::NotNumeric {
                    species: species.to_string(),
                    field,
                    value: s.clone(),
                }),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error(
        "invalid dino record, empty {fields}; provided species: {species:?}, diet: {diet:?}, \
         where: {origin:?}, when: {era:?}, fact: {fact:?}"
    )]
    EmptyFields {
        fields: String,
        species: String,
        diet: String,
        origin: String,
        era: String,
        fact: String,
    },
    #[error("{field} of {species:?} is not a number: {value:?}")]
    NotNumeric {
        species: String,
        field: &'static str,
        value: String,
    },
    #[error("weight or height of {species:?} cannot be negative; weight: {weight}, height: {height}")]
    NegativeMeasure {
        species: String,
        weight: f64,
        height: f64,
    },
}

/// A validated creature record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Dino {
    pub species: String,
    pub weight: f64,
    pub height: f64,
    pub diet: String,
    pub origin: String,
    pub era: String,
    pub fact: String,
}

impl Dino {
    pub fn from_raw(raw: RawDino) -> Result<Self, ConstructionError> {
        let empty: Vec<&str> = [
            ("species", &raw.species),
            ("diet", &raw.diet),
            ("where", &raw.origin),
            ("when", &raw.era),
            ("fact", &raw.fact),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
        if !empty.is_empty() {
            return Err(ConstructionError::EmptyFields {
                fields: empty.join(", "),
                species: raw.species,
                diet: raw.diet,
                origin: raw.origin,
                era: raw.era,
                fact: raw.fact,
            });
        }

        let weight = raw.weight.parse("weight", &raw.species)?;
        let height = raw.height.parse("height", &raw.species)?;
        if weight < 0.0 || height < 0.0 {
            return Err(ConstructionError::NegativeMeasure {
                species: raw.species,
                weight,
                height,
            });
        }

        Ok(Self {
            species: raw.species,
            weight,
            height,
            diet: raw.diet,
            origin: raw.origin,
            era: raw.era,
            fact: raw.fact,
        })
    }

    /// Weight delta as a sentence. A heavier dino makes you the lighter one.
    pub fn compare_weight(&self, human_weight: f64) -> String {
        let diff = self.weight - human_weight;
        if diff != 0.0 {
            format!(
                "You are {} pounds {} than {}.",
                diff.abs(),
                if diff > 0.0 { "lighter" } else { "heavier" },
                self.species
            )
        } else {
            format!("You and {} both weigh the same.", self.species)
        }
    }

    /// Case-insensitive diet comparison as a sentence.
    pub fn compare_diet(&self, human_diet: &str) -> String {
        if self.diet.to_lowercase() != human_diet.to_lowercase() {
            format!(
                "You are a(n) {} while the {} is a(n) {}.",
                human_diet, self.species, self.diet
            )
        } else {
            format!("You both are {}s.", self.diet)
        }
    }

    /// Height delta against the total-inches form of the human height.
    pub fn compare_height(&self, human_height: Height) -> String {
        let diff = self.height - human_height.total_inches();
        if diff != 0.0 {
            format!(
                "You are {} inches {} than {}.",
                diff.abs(),
                if diff < 0.0 { "taller" } else { "shorter" },
                self.species
            )
        } else {
            format!("You and the {} are the same height.", self.species)
        }
    }
}

/// Constructs every record or reports the first invalid one. Output length
/// equals input length on success.
pub fn build_dinos(raw: Vec<RawDino>) -> Result<Vec<Dino>, ConstructionError> {
    raw.into_iter().map(Dino::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(species: &str) -> RawDino {
        RawDino {
            species: species.to_string(),
            weight: Measure::Number(1000.0),
            height: Measure::Number(100.0),
            diet: "carnivore".to_string(),
            origin: "North America".to_string(),
            era: "Late Cretaceous".to_string(),
            fact: "A fact.".to_string(),
        }
    }

    #[test]
    fn text_measures_coerce_to_numbers() {
        let mut record = raw("Brachiosaurus");
        record.weight = Measure::Text("70000".to_string());
        record.height = Measure::Text("372".to_string());
        let dino = Dino::from_raw(record).expect("record constructs");
        assert_eq!(dino.weight, 70000.0);
        assert_eq!(dino.height, 372.0);
    }

    #[test]
    fn empty_fields_are_rejected_and_listed() {
        let mut record = raw("Triceratops");
        record.diet = String::new();
        record.fact = String::new();
        let err = Dino::from_raw(record).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("diet, fact"), "unexpected message: {message}");
        assert!(message.contains("Triceratops"));
    }

    #[test]
    fn negative_measures_are_rejected() {
        let mut record = raw("Stegosaurus");
        record.weight = Measure::Number(-1.0);
        let err = Dino::from_raw(record).unwrap_err();
        assert!(matches!(err, ConstructionError::NegativeMeasure { .. }));
    }

    #[test]
    fn unparseable_text_measure_is_rejected() {
        let mut record = raw("Pteranodon");
        record.height = Measure::Text("tall".to_string());
        let err = Dino::from_raw(record).unwrap_err();
        assert!(matches!(
            err,
            ConstructionError::NotNumeric { field: "height", .. }
        ));
    }

    #[test]
    fn weight_sentences_follow_the_sign_of_the_delta() {
        let mut record = raw("Tyrannosaurus");
        record.weight = Measure::Number(1000.0);
        let dino = Dino::from_raw(record).unwrap();
        assert_eq!(
            dino.compare_weight(200.0),
            "You are 800 pounds lighter than Tyrannosaurus."
        );
        assert_eq!(
            dino.compare_weight(1200.0),
            "You are 200 pounds heavier than Tyrannosaurus."
        );
        assert_eq!(
            dino.compare_weight(1000.0),
            "You and Tyrannosaurus both weigh the same."
        );
    }

    #[test]
    fn diet_comparison_is_case_insensitive() {
        let dino = Dino::from_raw(raw("Elasmosaurus")).unwrap();
        assert_eq!(dino.compare_diet("Carnivore"), "You both are carnivores.");
        assert_eq!(
            dino.compare_diet("herbivore"),
            "You are a(n) herbivore while the Elasmosaurus is a(n) carnivore."
        );
    }

    #[test]
    fn height_sentences_follow_the_sign_of_the_delta() {
        let dino = Dino::from_raw(raw("Ankylosaurus")).unwrap();
        let shorter = Height {
            feet: 5.0,
            inches: 4.0,
        };
        assert_eq!(
            dino.compare_height(shorter),
            "You are 36 inches shorter than Ankylosaurus."
        );
        let taller = Height {
            feet: 10.0,
            inches: 4.0,
        };
        assert_eq!(
            dino.compare_height(taller),
            "You are 24 inches taller than Ankylosaurus."
        );
        let same = Height {
            feet: 8.0,
            inches: 4.0,
        };
        assert_eq!(
            dino.compare_height(same),
            "You and the Ankylosaurus are the same height."
        );
    }

    #[test]
    fn degenerate_height_components_count_as_zero() {
        let dino = Dino::from_raw(raw("Pteranodon")).unwrap();
        let degenerate = Height {
            feet: f64::NAN,
            inches: f64::NAN,
        };
        assert_eq!(
            dino.compare_height(degenerate),
            "You are 100 inches shorter than Pteranodon."
        );
    }
}
