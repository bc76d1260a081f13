use crate::errors::{Error, Result};

/// A fieldless enum with a human readable label and an integer value per variant.
///
/// Implement it by hand or declare the enum with [`display_enum!`](crate::display_enum).
pub trait DisplayEnum: Copy + PartialEq + 'static {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// All variants in declaration order.
    fn variants() -> &'static [Self];

    /// The variant identifier, e.g. `Pending`.
    fn name(&self) -> &'static str;

    fn value(&self) -> i32;

    /// Label shown to users, e.g. `Beklemede`.
    fn display_name(&self) -> &'static str;

    fn from_value(value: i32) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.value() == value)
    }

    fn name_by_value(value: i32) -> Option<&'static str> {
        Self::from_value(value).map(|v| v.name())
    }

    /// Integer value of the variant called `name`, or 0 when there is none.
    fn value_by_name(name: &str) -> i32 {
        Self::variants()
            .iter()
            .find(|v| v.name() == name)
            .map(|v| v.value())
            .unwrap_or(0)
    }

    /// Parses a variant identifier or its integer value.
    fn parse(text: &str, ignore_case: bool) -> Result<Self> {
        let text = text.trim();
        let by_name = Self::variants().iter().copied().find(|v| {
            if ignore_case {
                v.name().eq_ignore_ascii_case(text)
            } else {
                v.name() == text
            }
        });

        by_name
            .or_else(|| text.parse::<i32>().ok().and_then(Self::from_value))
            .ok_or_else(|| Error::EnumParse {
                type_name: Self::TYPE_NAME,
                value: text.to_string(),
            })
    }
}

/// Declares a fieldless enum together with its [`DisplayEnum`] implementation.
///
/// ```
/// use yardimci_core::display_enum;
/// use yardimci_core::enums::DisplayEnum;
///
/// display_enum! {
///     pub enum OrderStatus {
///         Pending = 1 => "Beklemede",
///         Shipped = 2 => "Kargoda",
///     }
/// }
///
/// assert_eq!(OrderStatus::Shipped.display_name(), "Kargoda");
/// assert_eq!(OrderStatus::value_by_name("Pending"), 1);
/// ```
#[macro_export]
macro_rules! display_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $crate::enums::DisplayEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn variants() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            fn value(&self) -> i32 {
                *self as i32
            }

            fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::DisplayEnum::display_name(self))
            }
        }
    };
}
