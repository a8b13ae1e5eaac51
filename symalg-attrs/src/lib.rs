mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use symalg_attrs::ErrorKind;
/// use symalg_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
///
/// let report = Foo.build_report("input", &[0..1]);
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not allowed", symbol),
///     labels = ["here"],
///     help = "remove it",
/// )]
/// pub struct Disallowed {
///     symbol: char,
/// }
///
/// let mut buf = Vec::new();
/// Disallowed { symbol: '#' }
///     .build_report("input", &[])
///     .write(("input", ariadne::Source::from("#")), &mut buf)
///     .unwrap();
/// let text = String::from_utf8_lossy(&buf);
/// assert!(text.contains("`#` is not allowed"));
/// assert!(text.contains("remove it"));
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | Required. The message displayed at the top of the error.                     |
/// | `labels`    | The text of the labels that point to each span of the error, in order.       |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression that should evaluate to a [`String`] (or, for `labels`, an
/// iterable of strings). For structs with named fields, the expression is evaluated with the
/// members of the struct in scope, so they can be used in the expression (tuple structs are not
/// supported).
///
/// Labels are paired with the error's spans in order; labels without a matching span are not
/// shown, so an error raised without any span still produces a report with its message.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
