use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
};

/// The tags of the `error` attribute.
#[derive(Debug)]
pub struct ErrorArgs {
    pub message: Expr,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Reads the tags from the `error` attribute. The `message` tag is required.
    fn from_attribute(attr: &Attribute) -> Result<Self> {
        let mut message = None;
        let mut labels = None;
        let mut help = None;

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut message
            } else if meta.path.is_ident("labels") {
                &mut labels
            } else if meta.path.is_ident("help") {
                &mut help
            } else {
                return Err(meta.error("expected `message`, `labels` or `help`"));
            };

            if slot.is_some() {
                return Err(meta.error("tag given more than once"));
            }
            *slot = Some(meta.value()?.parse::<Expr>()?);
            Ok(())
        })?;

        let message = message
            .ok_or_else(|| syn::Error::new_spanned(attr, "missing `message` tag"))?;
        Ok(Self { message, labels, help })
    }
}

/// Binds the named fields of `self` to local variables, so the tags can refer to them.
fn bind_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            quote! { let #ident { #(#names),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! {
            ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
        },
        Fields::Unit => TokenStream2::new(),
    }
}

/// A struct deriving [`ErrorKind`], with the tags of its `error` attribute.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let attr = item.attrs
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&item.ident, "missing `#[error(...)]` attribute"))?;

        Ok(ErrorKindTarget {
            args: ErrorArgs::from_attribute(attr)?,
            name: item.ident,
            fields: item.fields,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bindings = bind_fields(&self.name, &self.fields);
        let message = &self.args.message;
        let labels = self.args.labels
            .as_ref()
            .map_or_else(|| quote! { Vec::<String>::new() }, |labels| quote! { #labels });
        let help = self.args.help
            .as_ref()
            .map(|help| quote! { let report = report.with_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bindings

                // labels without a matching span are dropped
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let text = text.to_string();
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(symalg_error::EXPR);
                        if text.is_empty() { label } else { label.with_message(text) }
                    })
                    .collect::<Vec<_>>();

                let offset = spans.first().map_or(0, |span| span.start);
                let report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                report.finish()
            }
        });
    }
}
