//! Proc-macro implementation of `#[derive(EnumReflect)]`.
//!
//! The derive walks the enum's variants and emits:
//! 1. A static descriptor table pairing each variant with the string form of
//!    its identifier, in declaration order.
//! 2. A `discriminant` accessor based on an `as` cast.
//!
//! Explicit discriminants (`Variant = N`) need no special handling: the
//! table stores the variants themselves, so assigned values flow through the
//! cast. Uniqueness of values and names within one enum is already enforced
//! by the compiler at the definition site.
extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields};


/// Derives reflection metadata for a fieldless enum.
///
/// The annotated enum must be `Copy` (the usual
/// `#[derive(Clone, Copy, PartialEq)]` on C-like enums satisfies this) and
/// must not be generic. Variants carrying data are rejected with a compile
/// error, as is applying the derive to a struct or union.
#[proc_macro_derive(EnumReflect)]
pub fn derive_enum_reflect(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                enum_ident.span(),
                "EnumReflect can only be derived for enums",
            ));
        }
    };

    // A generic C-like enum cannot exist: `as` casts require a concrete
    // fieldless enum, and so does the static descriptor table.
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "EnumReflect does not support generic enums",
        ));
    }

    let mut entries = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "EnumReflect requires a fieldless enum; variants must not carry data",
            ));
        }
        let variant_ident = &variant.ident;
        let name = variant_ident.to_string();
        entries.push(quote! { (#enum_ident::#variant_ident, #name) });
    }

    let type_name = enum_ident.to_string();

    // An empty enum has no values to cast; `match` keeps the accessor total.
    let discriminant_body = if data.variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { *self as i64 }
    };

    Ok(quote! {
        impl ::enum_reflect::EnumReflect for #enum_ident {
            const DESCRIPTOR: ::enum_reflect::EnumDescriptor<Self> =
                ::enum_reflect::EnumDescriptor::new(#type_name, &[#(#entries),*]);

            #[inline]
            fn discriminant(&self) -> i64 {
                #discriminant_body
            }
        }
    })
}
