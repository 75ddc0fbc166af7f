// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.

/// Generate a `fn(self) -> &'static str` naming each variant of a fieldless
/// enum. With `display`, the same names also back the `Display` impl.
///
/// ```ignore
/// crate::str_names! {
///     /// Filename token.
///     MyEnum::token, display {
///         Foo => "foo",
///         Bar => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! str_names {
    (
        $(#[$meta:meta])*
        $enum:ident :: $method:ident { $( $variant:ident => $str:literal ),+ $(,)? }
    ) => {
        impl $enum {
            $(#[$meta])*
            pub fn $method(self) -> &'static str {
                match self {
                    $( Self::$variant => $str, )+
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $enum:ident :: $method:ident, display { $( $variant:ident => $str:literal ),+ $(,)? }
    ) => {
        $crate::str_names! { $(#[$meta])* $enum::$method { $( $variant => $str ),+ } }

        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.$method())
            }
        }
    };
}
