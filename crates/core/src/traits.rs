//! Core traits for the admin panel
//!
//! This module defines the traits that records, schemas and configuration
//! implement to provide consistent validation and identification.

use crate::error::AdminResult;
use crate::types::RecordId;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use aricon_core::{AdminError, AdminResult, Validatable};
///
/// struct Credentials {
///     email: String,
/// }
///
/// impl Validatable for Credentials {
///     fn validate(&self) -> AdminResult<()> {
///         if !self.email.contains('@') {
///             return Err(AdminError::validation("Please enter a valid email address."));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `AdminError` describing the problem.
    fn validate(&self) -> AdminResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for values that may carry a server-assigned identifier
///
/// Presence of an identifier is what separates an edit from a create.
pub trait Identifiable {
    /// The identifier, if the backing store has assigned one
    fn record_id(&self) -> Option<&RecordId>;

    /// Whether the value has been persisted
    fn is_persisted(&self) -> bool {
        self.record_id().is_some_and(|id| !id.is_empty())
    }
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for values with a human-readable name
pub trait Named {
    /// Name shown to the user
    fn display_name(&self) -> String;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;

    struct Draft {
        id: Option<RecordId>,
        name: String,
    }

    impl Validatable for Draft {
        fn validate(&self) -> AdminResult<()> {
            if self.name.trim().is_empty() {
                return Err(AdminError::validation("Name cannot be empty."));
            }
            Ok(())
        }
    }

    impl Identifiable for Draft {
        fn record_id(&self) -> Option<&RecordId> {
            self.id.as_ref()
        }
    }

    #[test]
    fn test_validatable_defaults() {
        let draft = Draft {
            id: None,
            name: "  ".to_string(),
        };
        assert!(!draft.is_valid());
        assert_eq!(
            draft.validation_errors(),
            vec!["Validation error: Name cannot be empty.".to_string()]
        );
    }

    #[test]
    fn test_identifiable_persisted() {
        let mut draft = Draft {
            id: None,
            name: "Dr. Rao".to_string(),
        };
        assert!(!draft.is_persisted());

        draft.id = Some(RecordId::new(""));
        assert!(!draft.is_persisted());

        draft.id = Some(RecordId::new("abc123"));
        assert!(draft.is_persisted());
    }
}
