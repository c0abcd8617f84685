//! Serde mirrors of the backend serializers, one module per backend app.
//!
//! Conventions, matching what Django REST Framework puts on the wire:
//! ids are server-assigned UUID strings (the user id is numeric), decimal
//! fields arrive as strings, dates are ISO-8601 strings, and choice fields
//! are SCREAMING_SNAKE_CASE tokens. Fields the client never reads
//! (`custom_data`, timestamps) are simply not modeled; serde ignores them.

pub mod commerce;
pub mod inventory;
pub mod livestock;
pub mod produce;
pub mod user;
pub mod workforce;

/// Declares a backend choice field: a copyable enum whose serde form is the
/// backend token, plus the `ALL`/`value`/`label` surface the form `<select>`s
/// need.
macro_rules! choice_field {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal, $label:literal;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $value)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The wire token, also used as the `<option>` value.
            pub fn value(self) -> &'static str {
                match self { $($name::$variant => $value,)+ }
            }

            /// Human-readable form label.
            pub fn label(self) -> &'static str {
                match self { $($name::$variant => $label,)+ }
            }

            /// Inverse of [`Self::value`], for `<select>` change handlers.
            pub fn from_value(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|c| c.value() == value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub(crate) use choice_field;

#[cfg(test)]
mod tests {
    choice_field!(Fruit {
        Apple => "APPLE", "Apple";
        Pear => "PEAR", "Pear";
    });

    #[test]
    fn test_choice_field_surface() {
        assert_eq!(Fruit::ALL.len(), 2);
        assert_eq!(Fruit::Apple.value(), "APPLE");
        assert_eq!(Fruit::Pear.label(), "Pear");
        assert_eq!(Fruit::from_value("PEAR"), Some(Fruit::Pear));
        assert_eq!(Fruit::from_value("MANGO"), None);
        assert_eq!(serde_json::to_string(&Fruit::Apple).unwrap(), "\"APPLE\"");
    }
}
