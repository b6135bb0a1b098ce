//! Checks that level content only names things that exist.

use std::fmt;

use super::data::{GameplayDefaults, LevelDef};
use super::registry::ContentRegistry;

/// What a dangling reference was expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRef {
    Level,
    Panner,
    SpawnPoint,
}

#[derive(Debug)]
pub struct ValidationError {
    /// Level the reference lives in, or the defaults file
    pub owner: String,
    /// Path of the offending field, e.g. `buttons[0].targets`
    pub field: String,
    pub expected: MissingRef,
    pub missing_id: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} names {:?} '{}', which does not exist",
            self.owner, self.field, self.expected, self.missing_id
        )
    }
}

/// Push an error for every target in `$targets` that is not a panner of `$level`
macro_rules! check_targets {
    ($errors:expr, $level:expr, $items:expr, $name:literal) => {
        for (index, item) in $items.iter().enumerate() {
            for target in &item.targets {
                if !$level.has_panner(target) {
                    $errors.push(ValidationError {
                        owner: $level.id.clone(),
                        field: format!("{}[{}].targets", $name, index),
                        expected: MissingRef::Panner,
                        missing_id: target.clone(),
                    });
                }
            }
        }
    };
}

fn validate_level(level: &LevelDef, registry: &ContentRegistry, errors: &mut Vec<ValidationError>) {
    if level.spawn_points.is_empty() {
        errors.push(ValidationError {
            owner: level.id.clone(),
            field: "spawn_points".to_string(),
            expected: MissingRef::SpawnPoint,
            missing_id: "<any>".to_string(),
        });
    }

    check_targets!(errors, level, level.buttons, "buttons");
    check_targets!(errors, level, level.doors, "doors");
    check_targets!(errors, level, level.collectibles, "collectibles");

    if let Some(goal) = &level.goal {
        if registry.level(&goal.next_level).is_none() {
            errors.push(ValidationError {
                owner: level.id.clone(),
                field: "goal.next_level".to_string(),
                expected: MissingRef::Level,
                missing_id: goal.next_level.clone(),
            });
        }
    }
}

/// Every dangling reference in the loaded content, in file order.
pub fn validate_content(
    registry: &ContentRegistry,
    defaults: &GameplayDefaults,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if registry.level(&defaults.first_level).is_none() {
        errors.push(ValidationError {
            owner: "gameplay_defaults".to_string(),
            field: "first_level".to_string(),
            expected: MissingRef::Level,
            missing_id: defaults.first_level.clone(),
        });
    }

    for level in registry.level_order.iter().filter_map(|id| registry.level(id)) {
        validate_level(level, registry, &mut errors);
    }

    errors
}
