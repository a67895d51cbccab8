/// Declares a record type.
///
/// Generates a struct with one public [`Slot`](crate::Slot) per field and a
/// [`Record`](crate::Record) impl whose schema is built on first use and
/// cached for the life of the process.
///
/// ```ignore
/// use lcd_model::{record, verify, FieldSpec};
///
/// record! {
///     /// A person.
///     pub struct Person {
///         first_name: FieldSpec::new().check(verify::not_missing()),
///         last_name: FieldSpec::new(),
///     }
/// }
///
/// record! {
///     /// Tolerates keys added by newer producers.
///     #[record(ignore_unknown_keys)]
///     pub struct PersonV2 {
///         first_name: FieldSpec::new(),
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (@attrs $ignore:literal [$($kept:tt)*]
        #[record(ignore_unknown_keys)] $($rest:tt)*
    ) => {
        $crate::record!(@attrs true [$($kept)*] $($rest)*);
    };

    (@attrs $ignore:literal [$($kept:tt)*]
        #[$meta:meta] $($rest:tt)*
    ) => {
        $crate::record!(@attrs $ignore [$($kept)* #[$meta]] $($rest)*);
    };

    (@attrs $ignore:literal [$(#[$meta:meta])*]
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $spec:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: $crate::Slot, )*
        }

        impl $crate::Record for $name {
            fn schema() -> &'static $crate::RecordSchema {
                static SCHEMA: ::std::sync::OnceLock<$crate::RecordSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::RecordSchema::builder(stringify!($name))
                        .ignore_unknown_keys($ignore)
                        $( .field(stringify!($field), $spec) )*
                        .build()
                })
            }

            fn slot(&self, name: &str) -> ::std::option::Option<&$crate::Slot> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(&self.$field);
                    }
                )*
                let _ = name;
                ::std::option::Option::None
            }

            fn slot_mut(&mut self, name: &str) -> ::std::option::Option<&mut $crate::Slot> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(&mut self.$field);
                    }
                )*
                let _ = name;
                ::std::option::Option::None
            }
        }
    };

    (#[$($attr:tt)*] $($rest:tt)*) => {
        $crate::record!(@attrs false [] #[$($attr)*] $($rest)*);
    };

    ($vis:vis struct $($rest:tt)*) => {
        $crate::record!(@attrs false [] $vis struct $($rest)*);
    };
}

/// Builds a [`Mapping`](crate::Mapping) from `key => value` pairs, converting
/// each value with `Value::from`.
///
/// ```ignore
/// let kwargs = lcd_model::mapping! { "name" => "john", "age" => 42 };
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        mapping
    }};
}
